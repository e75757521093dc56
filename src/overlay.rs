use crate::constants::{HINT_ID, HUD_ID, PROJECT_PANEL_ID};
use crate::core::{Project, ViewMode};
use web_sys as web;

#[inline]
fn show_el(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        let cl = el.class_list();
        _ = cl.remove_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
fn hide_el(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        let cl = el.class_list();
        _ = cl.add_1("hidden");
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

/// Reflect the view mode in the DOM: the hint pill belongs to overview, the
/// HUD backdrop and carousel to focus.
pub fn sync_mode(document: &web::Document, mode: ViewMode) {
    match mode {
        ViewMode::Overview => {
            show_el(document, HINT_ID);
            hide_el(document, HUD_ID);
        }
        ViewMode::Focus => {
            hide_el(document, HINT_ID);
            show_el(document, HUD_ID);
        }
    }
}

/// Re-render the carousel panel for the current project. Only the panel's
/// content is replaced; the prev/next/exit controls are static elements so
/// their listeners survive.
pub fn set_project(document: &web::Document, project: &Project, index: usize, total: usize) {
    if let Some(el) = document.get_element_by_id(PROJECT_PANEL_ID) {
        let tags: String = project
            .tech
            .iter()
            .map(|t| format!("<span class='tag'>{}</span>", t))
            .collect();
        let html = format!(
            "<img class='shot' src='{shot}' alt='{title}'/>\
             <div class='tags'>{tags}</div>\
             <h1>{title}</h1>\
             <p>{desc}</p>\
             <div class='panel-row'>\
               <a class='repo' href='{repo}' target='_blank' rel='noopener noreferrer'>View Code</a>\
               <span class='counter'>{pos} / {total}</span>\
             </div>",
            shot = project.screenshot,
            title = project.title,
            tags = tags,
            desc = project.description,
            repo = project.repo_url,
            pos = index + 1,
            total = total,
        );
        el.set_inner_html(&html);
    }
}
