//! Page sections: hero, expertise, work, blog and the contact column

use std::time::Duration;

use eframe::egui;

use crate::constants::reveal::STAGGER_STEP_MS;
use crate::content::{Article, ArticleId, Content, Project, SkillCategory};
use crate::gui::constants::*;
use crate::gui::reveal::reveal;
use crate::view::{PageController, Section};

fn stagger(idx: usize) -> Duration {
    Duration::from_millis(idx as u64 * STAGGER_STEP_MS)
}

fn section_title(ui: &mut egui::Ui, eyebrow: &str, title: &str) {
    ui.label(egui::RichText::new(eyebrow.to_uppercase()).monospace().size(EYEBROW_SIZE).color(ACCENT));
    ui.label(egui::RichText::new(title).strong().size(TITLE_SIZE).color(TEXT_STRONG));
    ui.add_space(CARD_SPACING);
}

fn card<R>(ui: &mut egui::Ui, add: impl FnOnce(&mut egui::Ui) -> R) -> egui::InnerResponse<R> {
    egui::Frame::new()
        .fill(SURFACE)
        .stroke(egui::Stroke::new(1.0, BORDER))
        .corner_radius(12.0)
        .inner_margin(egui::Margin::same(PADDING as i8))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add(ui)
        })
}

fn tag(ui: &mut egui::Ui, text: &str) {
    egui::Frame::new()
        .fill(BACKGROUND)
        .stroke(egui::Stroke::new(1.0, BORDER))
        .corner_radius(4.0)
        .inner_margin(egui::Margin::symmetric(6, 2))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).monospace().small().color(TEXT_MUTED));
        });
}

fn skill_icon(icon: &str) -> &'static str {
    match icon {
        "code" => "💻",
        "server" => "🖥",
        "database" => "🗄",
        _ => "•",
    }
}

pub fn hero(ui: &mut egui::Ui, page: &mut PageController, content: &Content) {
    reveal(ui, page, "home/badge", stagger(0), |ui, _| {
        ui.label(egui::RichText::new("● Available for Senior Roles & Consulting").color(ACCENT));
    });
    ui.add_space(ITEM_SPACING);

    reveal(ui, page, "home/headline", stagger(1), |ui, _| {
        ui.label(
            egui::RichText::new("Building Digital Engines for Enterprise Growth.")
                .strong()
                .size(HERO_SIZE)
                .color(TEXT_STRONG),
        );
    });
    ui.add_space(ITEM_SPACING);

    reveal(ui, page, "home/intro", stagger(2), |ui, _| {
        ui.label(
            egui::RichText::new(format!(
                "I am {}, a {}. {}",
                content.profile.name, content.profile.role, content.profile.tagline
            ))
            .size(18.0)
            .color(TEXT),
        );
    });
    ui.add_space(CARD_SPACING);

    reveal(ui, page, "home/actions", stagger(3), |ui, page| {
        ui.horizontal(|ui| {
            if ui.button("View Selected Work ›").clicked() {
                page.scroll_to(Section::Work);
            }
        });
    });
    ui.add_space(CARD_SPACING);

    reveal(ui, page, "home/stats", stagger(4), |ui, _| {
        ui.separator();
        ui.horizontal_wrapped(|ui| {
            for stat in &content.stats {
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(&stat.value).strong().size(TITLE_SIZE).color(TEXT_STRONG));
                    ui.label(egui::RichText::new(stat.label.to_uppercase()).small().color(TEXT_MUTED));
                });
                ui.add_space(CARD_SPACING * 2.0);
            }
        });
    });
}

fn skill_card(ui: &mut egui::Ui, skill: &SkillCategory) {
    card(ui, |ui| {
        ui.label(egui::RichText::new(skill_icon(&skill.icon)).size(TITLE_SIZE));
        ui.label(egui::RichText::new(&skill.category).strong().size(CARD_TITLE_SIZE).color(TEXT_STRONG));
        ui.add_space(ITEM_SPACING);
        for tech in &skill.techs {
            ui.label(egui::RichText::new(format!("▸ {tech}")).color(TEXT_MUTED));
        }
    });
}

pub fn expertise(ui: &mut egui::Ui, page: &mut PageController, content: &Content) {
    section_title(ui, "My Tech Stack", "Technical Architecture");

    for (idx, skill) in content.skills.iter().enumerate() {
        reveal(ui, page, &format!("expertise/{idx}"), stagger(idx), |ui, _| {
            skill_card(ui, skill);
        });
        ui.add_space(CARD_SPACING);
    }
}

/// Client and one-line summary shown under a project title
fn byline(project: &Project) -> String {
    format!("{} // {}", project.client, project.summary)
}

fn project_card(ui: &mut egui::Ui, page: &mut PageController, project: &Project) {
    card(ui, |ui| {
        let artwork = ui
            .add(
                egui::Image::new(project.image.as_str())
                    .max_height(PROJECT_IMAGE_HEIGHT)
                    .corner_radius(8.0)
                    .sense(egui::Sense::click()),
            )
            .on_hover_text("View Case Study")
            .on_hover_cursor(egui::CursorIcon::PointingHand);
        if artwork.clicked() {
            page.open_project(project.id);
        }
        ui.add_space(ITEM_SPACING);

        ui.label(egui::RichText::new(&project.kind).monospace().size(EYEBROW_SIZE).color(ACCENT));
        ui.label(egui::RichText::new(&project.title).strong().size(CARD_TITLE_SIZE).color(TEXT_STRONG));
        ui.label(egui::RichText::new(byline(project)).color(TEXT_MUTED));
        ui.add_space(ITEM_SPACING);

        ui.label(egui::RichText::new("The Challenge").strong().color(TEXT_STRONG));
        ui.label(&project.challenge);
        ui.add_space(ITEM_SPACING);
        ui.label(egui::RichText::new("The Solution").strong().color(TEXT_STRONG));
        ui.label(&project.solution);
        ui.add_space(ITEM_SPACING);

        ui.label(egui::RichText::new("↗ Key Impact").strong().color(ACCENT));
        for item in &project.impact {
            ui.label(format!("• {item}"));
        }
        ui.add_space(ITEM_SPACING);

        ui.horizontal_wrapped(|ui| {
            for tech in &project.stack {
                tag(ui, tech);
            }
        });
        ui.add_space(ITEM_SPACING);

        if ui.button("View Project Details").clicked() {
            page.open_project(project.id);
        }
    });
}

pub fn work(ui: &mut egui::Ui, page: &mut PageController, content: &Content) {
    section_title(ui, "Case Studies", "Selected Projects");

    for (idx, project) in content.projects.iter().enumerate() {
        reveal(ui, page, &format!("work/{}", project.id), Duration::ZERO, |ui, page| {
            project_card(ui, page, project);
        });
        if idx + 1 < content.projects.len() {
            ui.add_space(CARD_SPACING * 2.0);
        }
    }
}

fn article_card(ui: &mut egui::Ui, article: &Article) -> egui::Response {
    let inner = card(ui, |ui| {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(&article.date).small().color(TEXT_MUTED));
            ui.label(egui::RichText::new("•").small().color(TEXT_MUTED));
            ui.label(egui::RichText::new(&article.read_time).small().color(TEXT_MUTED));
        });
        ui.label(egui::RichText::new(&article.title).strong().size(CARD_TITLE_SIZE).color(TEXT_STRONG));
        ui.add_space(ITEM_SPACING);
        ui.horizontal_wrapped(|ui| {
            for t in &article.tags {
                tag(ui, t);
            }
        });
    });
    inner.response.interact(egui::Sense::click()).on_hover_cursor(egui::CursorIcon::PointingHand)
}

pub fn blog(ui: &mut egui::Ui, page: &mut PageController, content: &Content) {
    section_title(ui, "Written Insights", "Engineering Thoughts");

    for (id, article) in content.article_ids().zip(&content.articles) {
        let ArticleId(idx) = id;
        reveal(ui, page, &format!("blog/{idx}"), stagger(idx), |ui, page| {
            if article_card(ui, article).clicked() {
                page.open_article(id);
            }
        });
        ui.add_space(CARD_SPACING);
    }
}

/// Left column of the contact section: pitch and direct links
pub fn contact_info(ui: &mut egui::Ui, content: &Content) {
    ui.label(
        egui::RichText::new("Ready to scale your next project?")
            .strong()
            .size(TITLE_SIZE)
            .color(TEXT_STRONG),
    );
    ui.add_space(ITEM_SPACING);
    ui.label(
        "I am currently accepting new contracts. Whether you need a system audit, \
         a full architectural overhaul, or a team lead, let's talk.",
    );
    ui.add_space(CARD_SPACING);

    let email = &content.profile.email;
    ui.hyperlink_to(format!("✉ {email}"), format!("mailto:{email}"));
    for (network, url) in &content.profile.socials {
        ui.hyperlink_to(network, url);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byline_joins_client_and_summary() {
        let content = Content::builtin().unwrap();
        let project = &content.projects[0];

        let line = byline(project);
        assert_eq!(line, format!("{} // {}", project.client, project.summary));
        assert!(!project.summary.is_empty());
    }

    #[test]
    fn test_stagger_steps_by_index() {
        assert_eq!(stagger(0), Duration::ZERO);
        assert_eq!(stagger(3), Duration::from_millis(3 * STAGGER_STEP_MS));
    }
}
