//! DOM-backed UI panels

use web_sys::{Document, Element};

use super::{GameOverSummary, Ui};

/// Class that makes an overlay screen visible
const ACTIVE_CLASS: &str = "active";

/// Looks up the page's overlay and readout elements once. Missing elements are
/// logged and skipped.
pub struct DomUi {
    start_screen: Option<Element>,
    game_over_screen: Option<Element>,
    player_score: Option<Element>,
    ai_score: Option<Element>,
    final_score: Option<Element>,
}

impl DomUi {
    pub fn new(document: &Document) -> Self {
        let find = |id: &str| {
            let el = document.get_element_by_id(id);
            if el.is_none() {
                log::warn!("UI element #{} not found", id);
            }
            el
        };
        Self {
            start_screen: find("start-screen"),
            game_over_screen: find("game-over-screen"),
            player_score: find("player-score"),
            ai_score: find("ai-score"),
            final_score: find("final-score"),
        }
    }
}

fn set_active(el: &Option<Element>, active: bool) {
    if let Some(el) = el {
        let classes = el.class_list();
        let _ = if active {
            classes.add_1(ACTIVE_CLASS)
        } else {
            classes.remove_1(ACTIVE_CLASS)
        };
    }
}

impl Ui for DomUi {
    fn show_start_screen(&mut self) {
        set_active(&self.start_screen, true);
    }

    fn hide_screens(&mut self) {
        set_active(&self.start_screen, false);
        set_active(&self.game_over_screen, false);
    }

    fn show_game_over(&mut self, summary: &GameOverSummary) {
        set_active(&self.game_over_screen, true);
        if let Some(el) = &self.final_score {
            el.set_inner_html(&format!(
                "<span style=\"color: {}\">{}</span><br>{}",
                summary.color(),
                summary.message(),
                summary.final_score()
            ));
        }
    }

    fn set_scores(&mut self, player: u32, ai: u32) {
        if let Some(el) = &self.player_score {
            el.set_text_content(Some(&player.to_string()));
        }
        if let Some(el) = &self.ai_score {
            el.set_text_content(Some(&ai.to_string()));
        }
    }
}
