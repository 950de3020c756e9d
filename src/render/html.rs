//! Single-page HTML front end
//!
//! Assembles the whole portfolio into one page: header/nav shell, hero,
//! sections, detail panels, contact form, footer. Bar widths and reveal
//! delays are computed here from the same display list the terminal uses;
//! the stylesheet only supplies the transition itself, so opening a panel
//! replays the cascade and closing it snaps every bar back to zero.

use chrono::{Datelike, Utc};
use std::fmt::Write;

use crate::config::{Config, ThemeConfig};
use crate::profile::skills::DetailPanel;
use crate::profile::Profile;
use crate::render::listing;
use crate::types::SectionId;

/// Escape text for HTML body/attribute positions.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the full page.
pub fn render_page(profile: &Profile, config: &Config) -> String {
    let mut body = String::new();
    header(&mut body);
    hero(&mut body, profile);
    skills(&mut body, profile, config);
    experience(&mut body, profile);
    certifications(&mut body, profile);
    education(&mut body, profile);
    contact(&mut body, profile);
    footer(&mut body, profile);

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{} — {}</title>\n\
         <style>{}</style>\n\
         </head>\n<body>\n{}\n<script>{}</script>\n</body>\n</html>\n",
        escape(&profile.identity.name),
        escape(&profile.identity.title),
        stylesheet(config),
        body,
        form_script(),
    )
}

fn header(out: &mut String) {
    out.push_str("<header class=\"site-header\"><div class=\"container\">");
    out.push_str("<a class=\"logo\" href=\"#\">MA</a><nav>");
    for section in SectionId::nav() {
        let _ = write!(
            out,
            "<a href=\"#{}\">{}</a>",
            section.as_anchor(),
            escape(section.title())
        );
    }
    out.push_str("</nav></div></header>\n");
}

fn hero(out: &mut String, profile: &Profile) {
    let id = &profile.identity;
    let _ = write!(
        out,
        "<section id=\"{anchor}\" class=\"hero\"><div class=\"container\">\
         <p class=\"badge\">📍 {location} · 🌍 {availability}</p>\
         <h1>{name}</h1>\
         <p class=\"headline\">{title}</p>\
         <p class=\"summary\">{summary}</p>\
         <p class=\"actions\">\
         <a class=\"button\" href=\"/cv\" download>⬇ Download CV</a>\
         <a class=\"button outline\" href=\"#contact\">✉ Contact Me</a>\
         </p></div></section>\n",
        anchor = SectionId::Hero.as_anchor(),
        location = escape(&id.location),
        availability = escape(&id.availability),
        name = escape(&id.name),
        title = escape(&id.title),
        summary = escape(&id.summary),
    );
}

fn skills(out: &mut String, profile: &Profile, config: &Config) {
    let _ = write!(
        out,
        "<section id=\"{}\" class=\"alt\"><div class=\"container\"><h2>{}</h2>\
         <p class=\"section-note\">Comprehensive expertise across enterprise IT \
         infrastructure, cloud platforms, and security solutions</p><div class=\"cards\">",
        SectionId::Skills.as_anchor(),
        SectionId::Skills.title(),
    );
    for category in &profile.skill_categories {
        let _ = write!(
            out,
            "<div class=\"card\"><h3>{}</h3><ul>",
            escape(&category.title)
        );
        for bullet in &category.bullets {
            let _ = write!(out, "<li>{}</li>", escape(bullet));
        }
        let _ = write!(
            out,
            "</ul><a class=\"panel-link\" href=\"#panel-{}\">Proficiency details</a></div>",
            category.panel.as_slug()
        );
    }
    out.push_str("</div>");
    for panel in &profile.detail_panels {
        detail_panel(out, panel, config);
    }
    out.push_str("</div></section>\n");
}

/// One detail panel as a `<details>` dialog. The open attribute is the
/// visibility flag: width and transition-delay are inlined per bar, the
/// stylesheet collapses every bar while the panel is closed.
fn detail_panel(out: &mut String, panel: &DetailPanel, config: &Config) {
    let rows = listing::display_list(&panel.listing, &config.animation);
    let _ = write!(
        out,
        "<details class=\"panel\" id=\"panel-{}\"><summary>{}</summary>\
         <p class=\"panel-subtitle\">{}</p><div class=\"panel-body\">",
        panel.id.as_slug(),
        escape(&panel.title),
        escape(&panel.subtitle),
    );

    let mut current_group: Option<&str> = None;
    for row in &rows {
        if row.group.as_deref() != current_group {
            if current_group.is_some() {
                out.push_str("</div>");
            }
            current_group = row.group.as_deref();
            if let Some(group) = current_group {
                let _ = write!(out, "<div class=\"group\"><h4>{}</h4>", escape(group));
            }
        }
        let classes = {
            let mut c = String::from("skill");
            if row.sub_item {
                c.push_str(" sub");
            }
            if row.emphasized {
                c.push_str(" pulse");
            }
            c
        };
        let _ = write!(
            out,
            "<div class=\"{classes}\">\
             <div class=\"skill-head\"><span class=\"skill-name\">{name}</span>\
             <span class=\"tier\">{label}</span><span class=\"score\">{score}/10</span></div>\
             <div class=\"bar\"><div class=\"bar-fill {css}\" \
             style=\"--target:{width}%;transition-delay:{delay}ms\"></div></div>",
            classes = classes,
            name = escape(&row.name),
            label = row.label,
            score = row.level.value(),
            css = ThemeConfig::css_class(row.bucket),
            width = row.width_percent,
            delay = row.delay_ms,
        );
        if let Some(description) = &row.description {
            let _ = write!(out, "<p class=\"skill-desc\">{}</p>", escape(description));
        }
        out.push_str("</div>");
    }
    if current_group.is_some() {
        out.push_str("</div>");
    }

    out.push_str(
        "</div><p class=\"legend\">\
         <span class=\"dot bar-highest\"></span>Expert (9-10)\
         <span class=\"dot bar-mid-high\"></span>Advanced (7-8)\
         <span class=\"dot bar-mid\"></span>Intermediate (5-6)\
         </p></details>",
    );
}

fn experience(out: &mut String, profile: &Profile) {
    let _ = write!(
        out,
        "<section id=\"{}\"><div class=\"container\"><h2>{}</h2>",
        SectionId::Experience.as_anchor(),
        SectionId::Experience.title(),
    );
    out.push_str("<div class=\"timeline\">");
    for item in &profile.experience {
        let _ = write!(
            out,
            "<div class=\"entry\"><h3>{}</h3><p class=\"role\">{}</p>\
             <p class=\"meta\">{} · {}</p><ul>",
            escape(&item.company),
            escape(&item.role),
            escape(&item.location),
            escape(&item.period),
        );
        for highlight in &item.highlights {
            let _ = write!(out, "<li>{}</li>", escape(highlight));
        }
        out.push_str("</ul></div>");
    }
    out.push_str("</div></div></section>\n");
}

fn certifications(out: &mut String, profile: &Profile) {
    let _ = write!(
        out,
        "<section id=\"{}\" class=\"alt\"><div class=\"container\"><h2>{}</h2>\
         <div class=\"cards\">",
        SectionId::Certifications.as_anchor(),
        SectionId::Certifications.title(),
    );
    for cert in &profile.certifications {
        let _ = write!(out, "<div class=\"card\"><p>🏅 {}</p>", escape(&cert.name));
        if let Some(issuer) = &cert.issuer {
            let _ = write!(out, "<p class=\"meta\">{}</p>", escape(issuer));
        }
        out.push_str("</div>");
    }
    out.push_str("</div></div></section>\n");
}

fn education(out: &mut String, profile: &Profile) {
    let _ = write!(
        out,
        "<section id=\"{}\"><div class=\"container\"><h2>{}</h2>",
        SectionId::Education.as_anchor(),
        SectionId::Education.title(),
    );
    let _ = write!(
        out,
        "<div class=\"card\"><h3>{}</h3><p class=\"meta\">{}</p></div>",
        escape(&profile.education.degree.title),
        escape(&profile.education.degree.institution),
    );
    out.push_str("<div class=\"card\">");
    for lang in &profile.education.languages {
        // language bars take their width directly; no classifier involved
        let _ = write!(
            out,
            "<div class=\"skill\"><div class=\"skill-head\">\
             <span class=\"skill-name\">{}</span><span class=\"tier\">{}</span></div>\
             <div class=\"bar\"><div class=\"bar-fill bar-highest static\" \
             style=\"--target:{}%\"></div></div></div>",
            escape(&lang.language),
            escape(&lang.level),
            lang.percent.min(100),
        );
    }
    out.push_str("</div></div></section>\n");
}

fn contact(out: &mut String, profile: &Profile) {
    let _ = write!(
        out,
        "<section id=\"{}\" class=\"alt\"><div class=\"container\"><h2>{}</h2>\
         <div class=\"contact-grid\"><div>",
        SectionId::Contact.as_anchor(),
        SectionId::Contact.title(),
    );
    for channel in &profile.contact.channels {
        match &channel.href {
            Some(href) => {
                let _ = write!(
                    out,
                    "<p class=\"channel\">{}: <a href=\"{}\" target=\"_blank\" \
                     rel=\"noopener noreferrer\">{}</a></p>",
                    escape(&channel.label),
                    escape(href),
                    escape(&channel.value),
                );
            }
            None => {
                let _ = write!(
                    out,
                    "<p class=\"channel\">{}: {}</p>",
                    escape(&channel.label),
                    escape(&channel.value),
                );
            }
        }
    }
    let _ = write!(
        out,
        "<div class=\"card\"><h3>{}</h3><p>{}</p></div></div>",
        escape(&profile.contact.availability_title),
        escape(&profile.contact.availability_note),
    );
    out.push_str(
        "<form id=\"contact-form\" class=\"card\">\
         <label>Name<input name=\"name\" type=\"text\" required placeholder=\"Your name\"></label>\
         <label>Email<input name=\"email\" type=\"email\" required placeholder=\"your@email.com\"></label>\
         <label>Message<textarea name=\"message\" required placeholder=\"Tell me about your project...\"></textarea></label>\
         <button type=\"submit\">Send Message</button>\
         <p id=\"form-status\" role=\"status\"></p>\
         </form></div></div></section>\n",
    );
}

fn footer(out: &mut String, profile: &Profile) {
    let _ = write!(
        out,
        "<footer><div class=\"container\"><p>{}</p><p class=\"meta\">{}</p>\
         <p class=\"meta\">© {} All rights reserved.</p></div></footer>",
        escape(&profile.identity.name),
        escape(&profile.identity.title),
        Utc::now().year(),
    );
}

/// Stylesheet. The reveal contract lives in the `.bar-fill` rules: closed
/// panels hold width 0, open panels transition to the inlined target over
/// the configured duration, offset by the inlined per-bar delay.
fn stylesheet(config: &Config) -> String {
    format!(
        "body{{font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',Roboto,sans-serif;\
         margin:0;background:#10141a;color:#e0e4ea;line-height:1.6}}\
         .container{{max-width:900px;margin:0 auto;padding:0 20px}}\
         .site-header{{position:sticky;top:0;background:#10141af2;border-bottom:1px solid #242a33;z-index:10}}\
         .site-header .container{{display:flex;justify-content:space-between;align-items:center;height:56px}}\
         .site-header a{{color:#9aa4b2;text-decoration:none;margin-left:16px}}\
         .site-header a:hover{{color:#e0e4ea}}\
         .logo{{font-weight:700;color:#e0e4ea!important;margin-left:0!important}}\
         section{{padding:56px 0}}\
         section.alt{{background:#151a22}}\
         h1{{font-size:2.6em;margin:0 0 8px}}\
         h2{{font-size:1.8em;margin:0 0 16px}}\
         .headline{{color:#58c4dc;font-size:1.2em;margin-top:0}}\
         .badge,.meta,.section-note,.skill-desc,.panel-subtitle{{color:#9aa4b2}}\
         .skill-desc{{font-size:.85em;margin:6px 0 0}}\
         .button{{display:inline-block;background:#58c4dc;color:#10141a;padding:10px 18px;\
         border-radius:8px;text-decoration:none;margin-right:10px}}\
         .button.outline{{background:transparent;color:#58c4dc;border:1px solid #58c4dc}}\
         .cards{{display:grid;grid-template-columns:repeat(auto-fit,minmax(260px,1fr));gap:16px}}\
         .card{{background:#1a212b;border:1px solid #242a33;border-radius:10px;padding:18px}}\
         .panel{{background:#1a212b;border:1px solid #242a33;border-radius:10px;\
         padding:14px 18px;margin-top:14px}}\
         .panel summary{{cursor:pointer;font-weight:600}}\
         .group h4{{margin:14px 0 6px;border-bottom:1px solid #242a33;padding-bottom:4px}}\
         .skill{{padding:8px 0}}\
         .skill.sub{{margin-left:18px}}\
         .skill-head{{display:flex;gap:10px;align-items:baseline}}\
         .skill-name{{flex:1;font-weight:500}}\
         .tier{{font-size:.8em;color:#58c4dc}}\
         .score{{font-size:.85em;color:#9aa4b2}}\
         .bar{{height:8px;background:#242a33;border-radius:4px;overflow:hidden;margin-top:6px}}\
         .bar-fill{{height:100%;width:0;border-radius:4px;\
         transition:width {reveal}ms cubic-bezier(0.33,1,0.68,1)}}\
         details[open] .bar-fill{{width:var(--target)}}\
         .bar-fill.static{{width:var(--target);transition:none}}\
         .bar-highest{{background:#34d399}}\
         .bar-mid-high{{background:#22d3ee}}\
         .bar-mid{{background:#64748b}}\
         .bar-lowest{{background:#64748b99}}\
         .skill.pulse .skill-name{{animation:pulse 2s ease-in-out infinite}}\
         @keyframes pulse{{50%{{opacity:.55}}}}\
         .dot{{display:inline-block;width:10px;height:10px;border-radius:5px;margin:0 6px 0 14px}}\
         .legend{{color:#9aa4b2;font-size:.8em}}\
         .timeline .entry{{border-left:2px solid #58c4dc;padding:0 0 18px 18px;margin-left:6px}}\
         .timeline h3{{margin:0}}\
         .role{{color:#58c4dc;margin:2px 0}}\
         .contact-grid{{display:grid;grid-template-columns:1fr 1fr;gap:24px}}\
         @media(max-width:700px){{.contact-grid{{grid-template-columns:1fr}}}}\
         form label{{display:block;margin-bottom:12px;color:#9aa4b2;font-size:.9em}}\
         form input,form textarea{{display:block;width:100%;box-sizing:border-box;\
         background:#10141a;color:#e0e4ea;border:1px solid #242a33;border-radius:6px;\
         padding:8px;margin-top:4px}}\
         form textarea{{min-height:110px}}\
         form button{{background:#58c4dc;color:#10141a;border:none;border-radius:8px;\
         padding:10px 18px;cursor:pointer}}\
         #form-status{{min-height:1.2em;font-size:.9em}}\
         footer{{background:#0b0e13;padding:28px 0;margin-top:28px}}",
        reveal = config.animation.reveal_ms,
    )
}

/// Form wiring: posts to the contact endpoint and surfaces the retry
/// prompt the API reports for validation/unavailable failures.
fn form_script() -> &'static str {
    r#"const form=document.getElementById('contact-form');
const status=document.getElementById('form-status');
form.addEventListener('submit',async e=>{
  e.preventDefault();
  status.textContent='Sending...';
  const data=Object.fromEntries(new FormData(form).entries());
  try{
    const res=await fetch('/api/contact',{method:'POST',
      headers:{'Content-Type':'application/json'},body:JSON.stringify(data)});
    const body=await res.json();
    if(res.ok){status.textContent=body.confirmation;form.reset();}
    else{status.textContent=body.error+(body.retryable?' — please try again.':'');}
  }catch(err){status.textContent='Could not reach the server — please try again.';}
});"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile;

    #[test]
    fn test_page_contains_sections_and_nav() {
        let page = render_page(profile::builtin(), &Config::default());
        for section in SectionId::nav() {
            assert!(page.contains(&format!("id=\"{}\"", section.as_anchor())));
            assert!(page.contains(&format!("href=\"#{}\"", section.as_anchor())));
        }
        assert!(page.contains("Milos Avramovic"));
        assert!(page.contains("href=\"/cv\""));
    }

    #[test]
    fn test_bars_carry_width_and_delay() {
        let page = render_page(profile::builtin(), &Config::default());
        // LAN is level 9: width 90%, Expert
        assert!(page.contains("--target:90%"));
        assert!(page.contains("Expert"));
        // flat virtualization panel: second bar delayed one stagger step
        assert!(page.contains("transition-delay:100ms"));
        // transition duration comes from config
        assert!(page.contains("transition:width 700ms"));
    }

    #[test]
    fn test_escape_handles_markup() {
        assert_eq!(escape("a<b>&\"c\""), "a&lt;b&gt;&amp;&quot;c&quot;");
    }

    #[test]
    fn test_emphasized_rows_pulse() {
        let page = render_page(profile::builtin(), &Config::default());
        assert!(page.contains("skill pulse") || page.contains("skill sub pulse"));
    }
}
