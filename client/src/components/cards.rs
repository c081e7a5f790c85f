//! Content cards. Class names here are the reveal/stagger hooks.

use leptos::prelude::*;

use crate::content::{Card, SkillCategory};

/// Skill category with one progress bar per skill.
#[component]
pub fn SkillCategoryCard(category: SkillCategory) -> impl IntoView {
    view! {
        <div class="skill-category">
            <h3>{category.title}</h3>
            {category
                .skills
                .iter()
                .map(|skill| {
                    view! {
                        <div class="skill-card" data-progress=skill.progress.to_string()>
                            <span class="skill-card__name">{skill.name}</span>
                            <div class="skill-card__bar">
                                <div class="skill-card__fill" style:width=format!("{}%", skill.progress)></div>
                            </div>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

/// Title/subtitle/body card; `kind` picks the reveal class
/// (`project`, `experience`, `education`).
#[component]
pub fn InfoCard(card: Card, kind: &'static str) -> impl IntoView {
    view! {
        <article class=format!("{kind}-card")>
            <h3>{card.title}</h3>
            <p class="card__subtitle">{card.subtitle}</p>
            <p>{card.body}</p>
        </article>
    }
}
