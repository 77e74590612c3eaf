use crate::models::{CompletedProject, OngoingProject};

pub fn render_home() -> String {
    layout("Home", HOME_HTML)
}

pub fn render_about() -> String {
    layout("About Us", ABOUT_HTML)
}

pub fn render_services() -> String {
    layout("Services", SERVICES_HTML)
}

pub fn render_projects(completed: &[CompletedProject], ongoing: &[OngoingProject]) -> String {
    let completed_cards: String = completed
        .iter()
        .map(|project| {
            COMPLETED_CARD
                .replace("{{IMAGE}}", &escape(project.image))
                .replace("{{NAME}}", &escape(project.name))
                .replace("{{LOCATION}}", &escape(project.location))
                .replace("{{CLIENT}}", &escape(project.client))
                .replace("{{YEAR}}", &escape(project.year))
        })
        .collect();

    let ongoing_cards: String = ongoing
        .iter()
        .map(|project| {
            let status = project.status.min(100).to_string();
            ONGOING_CARD
                .replace("{{IMAGE}}", &escape(project.image))
                .replace("{{NAME}}", &escape(project.name))
                .replace("{{LOCATION}}", &escape(project.location))
                .replace("{{CLIENT}}", &escape(project.client))
                .replace("{{STATUS}}", &status)
        })
        .collect();

    let body = PROJECTS_HTML
        .replace("{{COMPLETED}}", &completed_cards)
        .replace("{{ONGOING}}", &ongoing_cards);
    layout("Projects", &body)
}

pub fn render_contact(success: bool) -> String {
    let banner = if success { SUCCESS_BANNER } else { "" };
    layout("Contact", &CONTACT_HTML.replace("{{BANNER}}", banner))
}

fn layout(title: &str, content: &str) -> String {
    LAYOUT_HTML
        .replace("{{TITLE}}", title)
        .replace("{{CONTENT}}", content)
}

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

const LAYOUT_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{TITLE}} | Builders &amp; Constructions</title>
  <style>
    :root {
      --ink: #2c3e50;
      --muted: #6c7a89;
      --accent: #e74c3c;
      --accent-2: #3498db;
      --bg: #f7f7f5;
      --card: #ffffff;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      background: var(--bg);
      color: var(--ink);
      font-family: "Segoe UI", "Helvetica Neue", Arial, sans-serif;
      line-height: 1.6;
    }

    header {
      background: var(--ink);
      color: white;
      padding: 18px 32px;
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 16px;
    }

    header .brand {
      font-size: 1.4rem;
      font-weight: 700;
      letter-spacing: 0.04em;
    }

    nav a {
      color: white;
      text-decoration: none;
      margin-left: 20px;
      font-weight: 500;
    }

    nav a:hover {
      color: var(--accent);
    }

    main {
      width: min(1100px, 100%);
      margin: 0 auto;
      padding: 36px 20px 56px;
    }

    h1, h2 {
      color: var(--ink);
    }

    .grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
      gap: 20px;
    }

    .card {
      background: var(--card);
      border-radius: 12px;
      padding: 20px;
      box-shadow: 0 10px 30px rgba(44, 62, 80, 0.08);
    }

    .card img {
      width: 100%;
      border-radius: 8px;
    }

    .progress {
      background: #ecf0f1;
      border-radius: 999px;
      height: 10px;
      overflow: hidden;
    }

    .progress span {
      display: block;
      height: 100%;
      background: var(--accent-2);
    }

    form {
      display: grid;
      gap: 14px;
      max-width: 560px;
    }

    input, textarea {
      width: 100%;
      padding: 12px;
      border: 1px solid #d0d7de;
      border-radius: 8px;
      font: inherit;
    }

    button {
      justify-self: start;
      border: none;
      border-radius: 999px;
      padding: 12px 28px;
      background: var(--accent);
      color: white;
      font-weight: 600;
      cursor: pointer;
    }

    .alert-success {
      background: #e8f6ee;
      color: #2d7a4b;
      border-radius: 8px;
      padding: 14px 18px;
      margin-bottom: 20px;
    }

    .chart {
      width: 100%;
      max-width: 900px;
      display: block;
      margin: 0 auto;
    }

    footer {
      text-align: center;
      color: var(--muted);
      padding: 24px;
      font-size: 0.9rem;
    }
  </style>
</head>
<body>
  <header>
    <div class="brand">Builders &amp; Constructions</div>
    <nav>
      <a href="/">Home</a>
      <a href="/about">About</a>
      <a href="/services">Services</a>
      <a href="/projects">Projects</a>
      <a href="/contact">Contact</a>
    </nav>
  </header>
  <main>
{{CONTENT}}
  </main>
  <footer>Udumalpet &middot; Coimbatore &middot; Karur &middot; Dharapuram</footer>
</body>
</html>
"#;

const HOME_HTML: &str = r#"    <section>
      <h1>Building homes and businesses across Tamil Nadu</h1>
      <p>Residential, commercial and renovation work delivered on schedule, from foundation to finishing.</p>
      <div class="grid">
        <div class="card"><h2>Residential</h2><p>Independent houses and villas built to your plan.</p></div>
        <div class="card"><h2>Commercial</h2><p>Shops, offices and warehouses with durable construction.</p></div>
        <div class="card"><h2>Renovation</h2><p>Extensions, remodelling and structural repair.</p></div>
      </div>
      <p><a href="/contact">Request a quote</a></p>
    </section>
"#;

const ABOUT_HTML: &str = r#"    <section>
      <h1>About Us</h1>
      <p>We are a construction firm serving Udumalpet, Coimbatore, Karur and Dharapuram. Our team handles design coordination, approvals, civil work and interiors under one contract.</p>
      <p>Every project is supervised on site by an experienced engineer and reported to the client at each milestone.</p>
    </section>
"#;

const SERVICES_HTML: &str = r#"    <section>
      <h1>Services</h1>
      <div class="grid">
        <div class="card"><h2>Planning &amp; Approvals</h2><p>Drawings, estimates and local body approvals.</p></div>
        <div class="card"><h2>Civil Construction</h2><p>Foundation, structure, masonry and roofing.</p></div>
        <div class="card"><h2>Interiors</h2><p>Flooring, woodwork, electrical and plumbing.</p></div>
        <div class="card"><h2>Renovation</h2><p>Remodelling and repair of existing buildings.</p></div>
      </div>
    </section>
"#;

const PROJECTS_HTML: &str = r#"    <section>
      <h1>Our Projects</h1>
      <h2>Completed Projects</h2>
      <div class="grid">
{{COMPLETED}}      </div>
      <h2>Ongoing Projects</h2>
      <div class="grid">
{{ONGOING}}      </div>
      <h2>Project Completion Over Years</h2>
      <img class="chart" src="/static/images/completion_chart.png" alt="Completed and ongoing projects per year" />
    </section>
"#;

const COMPLETED_CARD: &str = r#"        <div class="card">
          <img src="/static/images/{{IMAGE}}" alt="{{NAME}}" />
          <h3>{{NAME}}</h3>
          <p>Location: {{LOCATION}}<br />Client: {{CLIENT}}<br />Year: {{YEAR}}</p>
        </div>
"#;

const ONGOING_CARD: &str = r#"        <div class="card">
          <img src="/static/images/{{IMAGE}}" alt="{{NAME}}" />
          <h3>{{NAME}}</h3>
          <p>Location: {{LOCATION}}<br />Client: {{CLIENT}}</p>
          <div class="progress"><span style="width: {{STATUS}}%"></span></div>
          <p>{{STATUS}}% complete</p>
        </div>
"#;

const CONTACT_HTML: &str = r#"    <section>
      <h1>Contact Us</h1>
{{BANNER}}      <form method="post" action="/contact">
        <input type="text" name="name" placeholder="Your name" required />
        <input type="email" name="email" placeholder="Email address" required />
        <input type="tel" name="phone" placeholder="Phone number" required />
        <input type="text" name="subject" placeholder="Subject" required />
        <textarea name="message" rows="6" placeholder="Tell us about your project" required></textarea>
        <button type="submit">Send Message</button>
      </form>
    </section>
"#;

const SUCCESS_BANNER: &str = r#"      <div class="alert-success">Thank you! Your message has been sent. We will get back to you soon.</div>
"#;
