use eframe::egui::{RichText, Ui};

use crate::state::{AppState, Page};

// ---------------------------------------------------------------------------
// Left side panel – navigation
// ---------------------------------------------------------------------------

/// Render the sidebar: owner, page selector, footer.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    match &state.profile {
        Ok(profile) => {
            ui.heading(&profile.name);
            ui.label(&profile.tagline);
        }
        Err(_) => {
            ui.heading("Portfolio");
        }
    }
    ui.add_space(8.0);

    ui.strong("Browse the sections:");
    for page in Page::ALL {
        ui.radio_value(&mut state.page, page, page.label());
    }

    ui.separator();

    if let Ok(profile) = &state.profile {
        ui.label(RichText::new(&profile.footer.project).small());
        ui.label(RichText::new(&profile.footer.copyright).small());
    }
}
