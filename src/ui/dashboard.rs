use crate::service::aggregate::{RoleCounts, TeamSummary};
use crate::model::roster::RoleTag;

const BAR_WIDTH: usize = 20;

/// Render the team dashboard as plain text lines: one bar per tracked
/// stat, then the role badges. Renderer-agnostic on purpose.
pub fn dashboard_lines(summary: &TeamSummary) -> Vec<String> {
    vec![
        stat_row("Attack (AD)", summary.attack_damage, summary.attack_damage_percent()),
        stat_row("Health", summary.health, summary.health_percent()),
        stat_row("Armor", summary.armor, summary.armor_percent()),
        stat_row("Magic Resist", summary.magic_resist, summary.magic_resist_percent()),
        role_badges(&summary.roles),
    ]
}

fn stat_row(label: &str, value: f64, percent: f64) -> String {
    let filled = ((percent / 100.0) * BAR_WIDTH as f64).round() as usize;
    let bar: String = "#".repeat(filled) + &"-".repeat(BAR_WIDTH - filled);
    format!("{:<12} [{}] {:>6}", label, bar, value.round())
}

fn role_badges(roles: &RoleCounts) -> String {
    let badges: Vec<String> = RoleTag::ALL
        .iter()
        .filter(|tag| roles.count(**tag) > 0)
        .map(|tag| format!("{} x{}", tag.as_str(), roles.count(*tag)))
        .collect();

    if badges.is_empty() {
        "No champions slotted".to_string()
    } else {
        badges.join("  ")
    }
}
