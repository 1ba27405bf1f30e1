use eframe::egui::{Color32, RichText, Ui};

use crate::profile::Profile;
use crate::state::AppState;

/// Static pages render nothing but the profile; a broken profile replaces
/// the page with the error.
fn with_profile(ui: &mut Ui, state: &AppState, render: impl FnOnce(&mut Ui, &Profile)) {
    match &state.profile {
        Ok(profile) => render(ui, profile),
        Err(e) => {
            ui.colored_label(Color32::RED, format!("Error: {e}"));
        }
    }
}

fn bullet_list<S: AsRef<str>>(ui: &mut Ui, items: &[S]) {
    for item in items {
        ui.label(format!("• {}", item.as_ref()));
    }
}

// ---------------------------------------------------------------------------
// Home
// ---------------------------------------------------------------------------

pub fn home(ui: &mut Ui, state: &AppState) {
    with_profile(ui, state, |ui, profile| {
        ui.heading(&profile.name);
        ui.separator();

        ui.columns(2, |cols| {
            cols[0].strong("Contact");
            cols[0].label(format!("📍 {}", profile.contact.location));
            if let Some(email) = &profile.contact.email {
                cols[0].label(format!("📧 {email}"));
            }
            if let Some(phone) = &profile.contact.phone {
                cols[0].label(format!("📞 {phone}"));
            }

            cols[1].strong("Online");
            for link in &profile.links {
                cols[1].hyperlink_to(&link.label, &link.url);
            }
        });

        ui.separator();
        ui.strong("🎯 Professional objective");
        ui.label(RichText::new(&profile.objective).italics());
    });
}

// ---------------------------------------------------------------------------
// Education & experience
// ---------------------------------------------------------------------------

pub fn background(ui: &mut Ui, state: &AppState) {
    with_profile(ui, state, |ui, profile| {
        ui.heading("📚 Education & Courses");
        ui.separator();

        ui.strong("🎓 Education");
        let education: Vec<String> = profile.education.iter().map(|e| e.summary()).collect();
        bullet_list(ui, education.as_slice());

        ui.separator();
        ui.strong("📜 Courses");
        let courses: Vec<String> = profile.courses.iter().map(|e| e.summary()).collect();
        bullet_list(ui, courses.as_slice());
    });
}

// ---------------------------------------------------------------------------
// Skills
// ---------------------------------------------------------------------------

pub fn skills(ui: &mut Ui, state: &AppState) {
    with_profile(ui, state, |ui, profile| {
        ui.heading("💡 Skills");
        ui.separator();

        ui.strong("🛠 Tech skills");
        if !profile.skill_groups.is_empty() {
            ui.columns(profile.skill_groups.len(), |cols| {
                for (col, group) in cols.iter_mut().zip(&profile.skill_groups) {
                    col.label(RichText::new(&group.title).strong().color(Color32::DARK_GREEN));
                    bullet_list(col, group.items.as_slice());
                }
            });
        }

        ui.separator();
        ui.strong("🌐 Languages");
        for lang in &profile.languages {
            ui.label(format!("• {}: {}", lang.language, lang.level));
        }

        ui.separator();
        ui.strong("🤝 Soft skills");
        let half = profile.soft_skills.len().div_ceil(2);
        let (left, right) = profile.soft_skills.split_at(half);
        ui.columns(2, |cols| {
            for skill in left {
                cols[0].label(format!("✓ {skill}"));
            }
            for skill in right {
                cols[1].label(format!("✓ {skill}"));
            }
        });
    });
}
