pub fn render_index() -> String {
    INDEX_HTML.to_string()
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>The Fourth Trimester</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #fef9f2;
      --bg-2: #fbd3e0;
      --ink: #1f1d1b;
      --accent: #ec4899;
      --accent-2: #ca8a04;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 24px 60px rgba(236, 72, 153, 0.12);
    }

    * { box-sizing: border-box; }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #fff1f5 60%, #fef9f2 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(920px, 100%);
      background: var(--card);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 24px;
    }

    h1, h2 { font-family: "Fraunces", "Georgia", serif; margin: 0; }
    .subtitle { margin: 0; color: #5f5c57; }
    .hidden { display: none !important; }

    nav { display: flex; flex-wrap: wrap; gap: 6px; padding: 6px; background: rgba(236, 72, 153, 0.08); border-radius: 999px; }
    nav button { background: transparent; color: #6b645d; box-shadow: none; padding: 8px 14px; }
    nav button.active { background: white; color: var(--accent); }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 18px;
      font-size: 0.95rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
    }

    input, textarea, select {
      width: 100%;
      padding: 12px;
      border-radius: 14px;
      border: 1px solid rgba(236, 72, 153, 0.2);
      background: var(--bg-1);
      font: inherit;
    }

    form { display: grid; gap: 12px; }
    .card { background: white; border-radius: 20px; padding: 20px; border: 1px solid rgba(0, 0, 0, 0.06); display: grid; gap: 10px; }
    .grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 16px; }
    .task { padding: 12px; border-radius: 14px; border: 1px solid #fce7f3; cursor: pointer; }
    .task.done { text-decoration: line-through; opacity: 0.6; background: #f0fdf4; }
    .gap { height: 8px; }
    .bar { height: 8px; background: #fce7f3; border-radius: 999px; }
    .bar div { height: 8px; background: var(--accent); border-radius: 999px; }
    .status { min-height: 1.2em; color: #6b645d; }
    .status[data-type="error"] { color: #c63b2b; }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>The Fourth Trimester</h1>
      <p class="subtitle">Gentle daily check-ins for your recovery.</p>
    </header>

    <section id="auth" class="card hidden">
      <h2>Welcome</h2>
      <form id="auth-form">
        <input name="name" placeholder="Your Full Name" />
        <input name="email" type="email" placeholder="Email Address" required />
        <input name="password" type="password" placeholder="Secure Password" required />
        <input name="kids" type="number" placeholder="Number of kids" value="1" />
        <input name="kidsAges" placeholder="e.g. 2 mo, 3y" />
        <textarea name="healthIssues" placeholder="e.g. Low iron, difficulty sleeping..."></textarea>
        <button type="submit">Sign In</button>
      </form>
    </section>

    <div id="shell" class="hidden">
      <nav>
        <button data-tab="dashboard">Dashboard</button>
        <button data-tab="checkin">Check-in</button>
        <button data-tab="community">Community</button>
        <button data-tab="profile">Profile</button>
        <button id="logout" type="button">Sign out</button>
      </nav>

      <section data-panel="dashboard" class="grid">
        <div class="card">
          <h2 id="welcome"></h2>
          <p><strong id="streak">0</strong> day streak</p>
          <div class="bar"><div id="progress" style="width: 0%"></div></div>
          <p id="milestone" class="subtitle"></p>
        </div>
        <div class="card">
          <h2>Whole Food Nutrition</h2>
          <p id="recipe" class="subtitle">Complete your check-in to see personalized, easy recipes.</p>
        </div>
        <div class="card">
          <h2>Your Recovery Checklist</h2>
          <div id="insight"><p class="subtitle">Check in to receive your first tips.</p></div>
          <ul id="sources"></ul>
        </div>
      </section>

      <section data-panel="checkin" class="card">
        <h2>Daily Check-in</h2>
        <form id="checkin-form">
          <div class="grid" id="ratings"></div>
          <textarea name="notes" placeholder="How are you really feeling?"></textarea>
          <button type="submit">Complete Check-in</button>
        </form>
      </section>

      <section data-panel="community" class="grid">
        <div class="card">
          <h2>Forum</h2>
          <form id="post-form">
            <textarea name="content" placeholder="Ask a question or share an update..."></textarea>
            <button type="submit">Post</button>
          </form>
          <div id="posts"></div>
        </div>
        <div class="card">
          <h2>Local Events</h2>
          <div id="events"></div>
        </div>
      </section>

      <section data-panel="profile" class="card">
        <h2>Your Profile</h2>
        <form id="profile-form">
          <input name="name" placeholder="Name" />
          <input name="email" disabled />
          <input name="kids" type="number" />
          <input name="kidsAges" />
          <select name="birthType">
            <option>Vaginal</option>
            <option>C-Section</option>
            <option>Vaginal with Intervention</option>
            <option>Other</option>
          </select>
          <textarea name="diagnoses" placeholder="Diagnoses"></textarea>
          <textarea name="medicalNotes" placeholder="Medical notes"></textarea>
          <button type="submit">Save Profile</button>
        </form>
      </section>
    </div>

    <div class="status" id="status"></div>
  </main>

  <script>
    const RATINGS = [
      ['happiness', 'Happiness / Mood', 3],
      ['pain', 'Physical Pain', 1],
      ['nausea', 'Nausea', 1],
      ['swelling', 'Swelling', 1],
      ['fatigue', 'Fatigue / Energy', 3],
      ['milkSupply', 'Milk Supply', 3]
    ];
    const $ = (id) => document.getElementById(id);
    let profile = null;

    const setStatus = (message, type) => {
      $('status').textContent = message;
      $('status').dataset.type = type || '';
    };

    const api = async (path, options = {}) => {
      const res = await fetch(path, {
        headers: { 'content-type': 'application/json' },
        ...options,
        body: options.body ? JSON.stringify(options.body) : undefined
      });
      if (!res.ok) {
        const err = new Error((await res.text()) || 'Request failed');
        err.status = res.status;
        throw err;
      }
      return res.json();
    };

    const text = (tag, content, className) => {
      const el = document.createElement(tag);
      el.textContent = content;
      if (className) el.className = className;
      return el;
    };

    const showTab = (tab) => {
      document.querySelectorAll('nav button[data-tab]').forEach((b) => b.classList.toggle('active', b.dataset.tab === tab));
      document.querySelectorAll('[data-panel]').forEach((p) => p.classList.toggle('hidden', p.dataset.panel !== tab));
      if (tab === 'dashboard') loadDashboard().catch((e) => setStatus(e.message, 'error'));
      if (tab === 'community') loadCommunity().catch((e) => setStatus(e.message, 'error'));
    };

    const selectTab = async (tab) => {
      const session = await api('/api/session', { method: 'POST', body: { command: 'select_tab', value: tab } });
      showTab(session.tab);
    };

    let insightPoll = null;
    const renderInsight = (panel) => {
      clearTimeout(insightPoll);
      const box = $('insight');
      box.innerHTML = '';
      $('sources').innerHTML = '';
      if (panel.loading) {
        box.appendChild(text('p', 'Consulting medical research databases...', 'subtitle'));
        insightPoll = setTimeout(() => api('/api/insight').then(renderInsight).catch(() => {}), 1500);
      }
      if (!panel.insight) return;
      const done = new Set(panel.completed.completed);
      panel.insight.blocks.forEach((block) => {
        if (block.kind === 'separator') {
          box.appendChild(text('div', '', 'gap'));
        } else if (block.kind === 'task') {
          const el = text('div', block.text, done.has(block.text) ? 'task done' : 'task');
          el.onclick = () => api('/api/insight/tasks/toggle', { method: 'POST', body: { task: block.text } }).then(renderInsight);
          box.appendChild(el);
        } else {
          box.appendChild(text('p', block.text));
        }
      });
      if (panel.insight.recipe) $('recipe').textContent = panel.insight.recipe;
      panel.insight.sources.forEach((src) => {
        const li = document.createElement('li');
        const a = text('a', src.title || 'Research Link');
        if (src.uri) a.href = src.uri;
        a.target = '_blank';
        li.appendChild(a);
        $('sources').appendChild(li);
      });
    };

    const loadDashboard = async () => {
      const dash = await api('/api/dashboard');
      $('welcome').textContent = `Welcome back, ${dash.name}`;
      $('streak').textContent = dash.streak;
      $('progress').style.width = `${dash.milestone.progressPercent}%`;
      $('milestone').textContent = dash.milestone.daysToNext
        ? `${dash.milestone.daysToNext} days to your next milestone!`
        : 'Complete a check-in to start your streak.';
      if (dash.lastCheckIn) renderInsight(await api('/api/insight'));
    };

    const loadCommunity = async () => {
      const [posts, events] = await Promise.all([api('/api/forum/posts'), api('/api/events')]);
      const postsEl = $('posts');
      postsEl.innerHTML = '';
      posts.forEach((post) => {
        const card = document.createElement('div');
        card.className = 'card';
        card.appendChild(text('strong', `${post.authorName} · ${post.location}`));
        card.appendChild(text('p', post.content));
        post.replies.forEach((r) => card.appendChild(text('p', `↳ ${r.authorName}: ${r.content}`, 'subtitle')));
        const reply = document.createElement('input');
        reply.placeholder = 'Write your response...';
        reply.onkeydown = (e) => {
          if (e.key !== 'Enter' || !reply.value.trim()) return;
          api(`/api/forum/posts/${post.id}/replies`, { method: 'POST', body: { content: reply.value } }).then(loadCommunity);
        };
        card.appendChild(reply);
        postsEl.appendChild(card);
      });
      const eventsEl = $('events');
      eventsEl.innerHTML = '';
      events.forEach((ev) => {
        const card = document.createElement('div');
        card.className = 'card';
        card.appendChild(text('strong', `${ev.locationName} (${ev.locationType})`));
        card.appendChild(text('p', `${ev.date} ${ev.time} · ${ev.organizerName}`, 'subtitle'));
        card.appendChild(text('p', ev.description));
        const joined = profile && ev.attendees.includes(profile.email);
        const btn = text('button', joined ? 'Joined' : `Join In (${ev.attendees.length})`);
        btn.onclick = () => api(`/api/events/${ev.id}/join`, { method: 'POST' }).then(loadCommunity);
        card.appendChild(btn);
        eventsEl.appendChild(card);
      });
    };

    const fillProfile = () => {
      const form = $('profile-form');
      ['name', 'email', 'kids', 'kidsAges', 'birthType', 'diagnoses', 'medicalNotes'].forEach((key) => {
        form.elements[key].value = profile[key];
      });
    };

    const enter = async () => {
      $('auth').classList.add('hidden');
      $('shell').classList.remove('hidden');
      fillProfile();
      const session = await api('/api/session');
      showTab(session.tab);
    };

    RATINGS.forEach(([key, label, value]) => {
      const wrap = document.createElement('label');
      wrap.textContent = label;
      const input = document.createElement('input');
      Object.assign(input, { type: 'range', min: 1, max: 5, step: 1, name: key, value });
      wrap.appendChild(input);
      $('ratings').appendChild(wrap);
    });

    $('auth-form').onsubmit = async (e) => {
      e.preventDefault();
      const data = Object.fromEntries(new FormData(e.target));
      data.kids = parseInt(data.kids, 10) || 1;
      try {
        profile = await api('/api/auth/login', { method: 'POST', body: data });
        await enter();
      } catch (err) {
        setStatus(err.message, 'error');
      }
    };

    $('checkin-form').onsubmit = async (e) => {
      e.preventDefault();
      const data = Object.fromEntries(new FormData(e.target));
      RATINGS.forEach(([key]) => { data[key] = parseInt(data[key], 10); });
      await api('/api/check-ins', { method: 'POST', body: data });
      e.target.reset();
      showTab('dashboard');
    };

    $('post-form').onsubmit = async (e) => {
      e.preventDefault();
      const content = e.target.elements.content.value;
      if (!content.trim()) return;
      await api('/api/forum/posts', { method: 'POST', body: { content } });
      e.target.reset();
      loadCommunity();
    };

    $('profile-form').onsubmit = async (e) => {
      e.preventDefault();
      const data = Object.fromEntries(new FormData(e.target));
      profile = await api('/api/profile', {
        method: 'PUT',
        body: { ...profile, ...data, kids: parseInt(data.kids, 10) || 0 }
      });
      setStatus('Saved', 'ok');
      setTimeout(() => setStatus('', ''), 3000);
    };

    $('logout').onclick = async () => {
      await api('/api/auth/logout', { method: 'POST' });
      profile = null;
      $('shell').classList.add('hidden');
      $('auth').classList.remove('hidden');
    };

    document.querySelectorAll('nav button[data-tab]').forEach((b) => {
      b.onclick = () => selectTab(b.dataset.tab).catch((err) => setStatus(err.message, 'error'));
    });

    api('/api/profile')
      .then((p) => { profile = p; return enter(); })
      .catch(() => $('auth').classList.remove('hidden'));
  </script>
</body>
</html>
"#;
