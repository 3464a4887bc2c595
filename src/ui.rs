use crate::report::{AggregateReport, round_to};

pub fn render_index(report: &AggregateReport) -> String {
    INDEX_HTML
        .replace("{{TOTAL}}", &round_to(report.total, 2).to_string())
        .replace("{{COUNT}}", &report.count.to_string())
        .replace("{{TREES}}", &report.equivalents.trees.to_string())
        .replace("{{CAR_KM}}", &report.equivalents.car_km.to_string())
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>CarbonTrack</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef5ea;
      --bg-2: #c9e4c5;
      --ink: #24302a;
      --accent: #3f8f5b;
      --accent-2: #2f4858;
      --warn: #c63b2b;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e4f1de 60%, #f4f8f1 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(920px, 100%);
      background: var(--card);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    h2 {
      margin: 0 0 12px;
      font-size: 1.3rem;
    }

    .subtitle {
      margin: 6px 0 0;
      color: #5f6a63;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 8px;
    }

    .stat .label {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #7d857f;
    }

    .stat .value {
      font-size: 1.6rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .tabs {
      display: flex;
      flex-wrap: wrap;
      gap: 6px;
      padding: 6px;
      background: rgba(47, 72, 88, 0.08);
      border-radius: 999px;
      width: fit-content;
    }

    .tab {
      background: transparent;
      border: none;
      border-radius: 999px;
      padding: 8px 14px;
      font-size: 0.9rem;
      font-weight: 600;
      color: #5f6a63;
      cursor: pointer;
    }

    .tab.active {
      background: white;
      color: var(--accent);
      box-shadow: 0 8px 16px rgba(47, 72, 88, 0.12);
    }

    form.calc {
      display: grid;
      grid-template-columns: 2fr 1fr auto;
      gap: 12px;
      margin-top: 16px;
    }

    select, input {
      font: inherit;
      padding: 12px 14px;
      border-radius: 14px;
      border: 1px solid rgba(47, 72, 88, 0.2);
      background: white;
    }

    button.primary, button.danger {
      border: none;
      border-radius: 999px;
      padding: 12px 20px;
      font: inherit;
      font-weight: 600;
      color: white;
      cursor: pointer;
    }

    button.primary {
      background: var(--accent);
    }

    button.danger {
      background: var(--warn);
    }

    .card {
      background: white;
      border-radius: 20px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
    }

    .bar {
      display: grid;
      grid-template-columns: 110px 1fr 70px;
      align-items: center;
      gap: 10px;
      margin: 8px 0;
    }

    .bar .track {
      height: 10px;
      border-radius: 999px;
      background: rgba(47, 72, 88, 0.08);
      overflow: hidden;
    }

    .bar .fill {
      height: 100%;
      background: var(--accent);
    }

    ul.history {
      list-style: none;
      padding: 0;
      margin: 0;
      display: grid;
      gap: 8px;
    }

    ul.history li {
      display: flex;
      justify-content: space-between;
      align-items: center;
      gap: 12px;
      padding: 10px 14px;
      border-radius: 14px;
      background: rgba(47, 72, 88, 0.04);
    }

    ul.history button {
      border: none;
      background: transparent;
      color: var(--warn);
      cursor: pointer;
      font: inherit;
    }

    .toast {
      min-height: 1.2em;
      color: #5f6a63;
    }

    .toast[data-type="error"] {
      color: var(--warn);
    }

    .toast[data-type="ok"] {
      color: var(--accent);
    }

    @media (max-width: 640px) {
      .app {
        padding: 28px 22px;
      }
      form.calc {
        grid-template-columns: 1fr;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>CarbonTrack</h1>
      <p class="subtitle">Log everyday activities and see what they emit.</p>
    </header>

    <section class="panel">
      <div class="stat">
        <span class="label">Total CO2 (kg)</span>
        <span id="total" class="value">{{TOTAL}}</span>
      </div>
      <div class="stat">
        <span class="label">Records</span>
        <span id="count" class="value">{{COUNT}}</span>
      </div>
      <div class="stat">
        <span class="label">Tree-years</span>
        <span id="trees" class="value">{{TREES}}</span>
      </div>
      <div class="stat">
        <span class="label">Car km</span>
        <span id="car-km" class="value">{{CAR_KM}}</span>
      </div>
    </section>

    <section class="card">
      <h2>Calculate</h2>
      <div class="tabs" role="tablist" id="tabs"></div>
      <form class="calc" id="calc-form">
        <select id="activity" aria-label="Activity"></select>
        <input id="amount" type="number" min="0" step="any" placeholder="Amount" required />
        <button class="primary" type="submit">Calculate</button>
      </form>
      <div id="result" class="panel" style="margin-top: 16px"></div>
      <p id="toast" class="toast"></p>
    </section>

    <section class="card">
      <h2>Breakdown</h2>
      <div id="breakdown"></div>
      <ul id="tips" class="subtitle"></ul>
    </section>

    <section class="card">
      <h2>History</h2>
      <ul id="history" class="history"></ul>
      <p><button class="danger" id="clear" type="button">Clear history</button></p>
    </section>
  </main>

  <script>
    const tabsEl = document.getElementById('tabs');
    const activityEl = document.getElementById('activity');
    const amountEl = document.getElementById('amount');
    const resultEl = document.getElementById('result');
    const toastEl = document.getElementById('toast');
    let categories = {};
    let activeCategory = 'transport';

    const setToast = (message, type) => {
      toastEl.textContent = message;
      toastEl.dataset.type = type;
    };

    const stat = (label, value) =>
      `<div class="stat"><span class="label">${label}</span><span class="value">${value}</span></div>`;

    const getJson = async (url, options) => {
      const res = await fetch(url, options);
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      return res.json();
    };

    const renderTabs = () => {
      tabsEl.innerHTML = '';
      Object.keys(categories).forEach((name) => {
        const button = document.createElement('button');
        button.type = 'button';
        button.className = 'tab' + (name === activeCategory ? ' active' : '');
        button.textContent = name;
        button.addEventListener('click', () => {
          activeCategory = name;
          renderTabs();
        });
        tabsEl.appendChild(button);
      });
      const info = categories[activeCategory];
      activityEl.innerHTML = info.activities
        .map((activity) => `<option value="${activity}">${activity.replace('_', ' ')}</option>`)
        .join('');
      amountEl.placeholder = `Amount (${info.default_unit})`;
    };

    const renderResult = (calc) => {
      const eq = calc.equivalents;
      resultEl.innerHTML = [
        stat('CO2 (kg)', calc.co2_kg),
        stat('Tree-years', eq.trees),
        stat('Car km', eq.car_km),
        stat('Phone charges', eq.smartphones),
        stat('TV hours', eq.tv_hours),
      ].join('');
    };

    const loadStats = async () => {
      const stats = await getJson('/api/stats');
      document.getElementById('total').textContent = stats.summary.total_emissions_kg;
      document.getElementById('count').textContent = stats.summary.total_records;
      document.getElementById('trees').textContent = stats.equivalents.trees;
      document.getElementById('car-km').textContent = stats.equivalents.car_km;
      document.getElementById('breakdown').innerHTML = Object.entries(stats.breakdown)
        .map(([name, item]) => `
          <div class="bar">
            <span>${name}</span>
            <div class="track"><div class="fill" style="width: ${item.percentage}%"></div></div>
            <span>${item.percentage}%</span>
          </div>`)
        .join('');
      document.getElementById('tips').innerHTML = stats.recommendations
        .map((tip) => `<li>${tip}</li>`)
        .join('');
    };

    const loadHistory = async () => {
      const history = await getJson('/api/history');
      const list = document.getElementById('history');
      list.innerHTML = '';
      history.records.forEach((record) => {
        const item = document.createElement('li');
        const when = new Date(record.timestamp).toLocaleString();
        const label = document.createElement('span');
        label.textContent = `${record.activity} \u00b7 ${record.amount} ${record.unit} \u00b7 `;
        const mass = document.createElement('strong');
        mass.textContent = `${record.co2_kg.toFixed(2)} kg`;
        const stamp = document.createElement('small');
        stamp.textContent = ` ${when}`;
        label.append(mass, stamp);
        item.appendChild(label);
        const remove = document.createElement('button');
        remove.type = 'button';
        remove.textContent = 'Delete';
        remove.addEventListener('click', () => deleteRecord(record.id));
        item.appendChild(remove);
        list.appendChild(item);
      });
    };

    const refresh = () => Promise.all([loadStats(), loadHistory()]);

    const deleteRecord = async (id) => {
      try {
        await getJson(`/api/history/${id}`, { method: 'DELETE' });
        await refresh();
      } catch (err) {
        setToast(err.message, 'error');
      }
    };

    document.getElementById('calc-form').addEventListener('submit', async (event) => {
      event.preventDefault();
      setToast('Calculating...', 'info');
      try {
        const body = {
          category: activeCategory,
          activity: activityEl.value,
          amount: Number(amountEl.value),
        };
        const res = await getJson('/api/calculate', {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify(body),
        });
        renderResult(res.calculation);
        setToast('Saved', 'ok');
        setTimeout(() => setToast('', ''), 1200);
        await refresh();
      } catch (err) {
        setToast(err.message, 'error');
      }
    });

    document.getElementById('clear').addEventListener('click', async () => {
      if (!confirm('Delete all records?')) {
        return;
      }
      try {
        const res = await getJson('/api/history', { method: 'DELETE' });
        setToast(`Removed ${res.deleted} records`, 'ok');
        resultEl.innerHTML = '';
        await refresh();
      } catch (err) {
        setToast(err.message, 'error');
      }
    });

    getJson('/api/categories')
      .then((res) => {
        categories = res.categories;
        renderTabs();
        return refresh();
      })
      .catch((err) => setToast(err.message, 'error'));
  </script>
</body>
</html>
"##;
