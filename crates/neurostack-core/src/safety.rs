//! Static risk-management reference.
//!
//! Advisory text only. Nothing here is validated medical guidance.

use indoc::indoc;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SafetyNote {
    pub title: &'static str,
    /// What to look out for.
    pub check: &'static str,
    /// What to do about it.
    pub action: &'static str,
}

const NOTES: [SafetyNote; 3] = [
    SafetyNote {
        title: "Cholinergic Toxicity (SLUDGE)",
        check: "Salivation, watery eyes, headache, irritability.",
        action: "Stop Alpha-GPC and ALCAR immediately. Washout for 4 days.",
    },
    SafetyNote {
        title: "Serotonin Syndrome",
        check: "Combining Rhodiola/Ashwagandha/Bacopa with SSRIs or MDMA.",
        action: "Do not use this stack if on psychiatric medication.",
    },
    SafetyNote {
        title: "B6 Neuropathy",
        check: "Ensure your B-Complex uses P-5-P, NOT Pyridoxine HCl.",
        action: "Switch B-Complex brands if the label lists Pyridoxine HCl.",
    },
];

/// Always-visible reminders, independent of time of day.
const QUICK_CHECKS: [&str; 2] = [
    "SLUDGE Warning: If you feel nausea, headache, or jaw tension, STOP Alpha-GPC.",
    "Hypertensive Risk: Never mix Tyrosine (Morning) with Sabroxy (Afternoon) directly.",
];

pub fn safety_notes() -> &'static [SafetyNote] {
    &NOTES
}

pub fn quick_checks() -> &'static [&'static str] {
    &QUICK_CHECKS
}

/// Cycle explanations shown next to the cycle status.
pub const BORON_CAPTION: &str = "Suppresses SHBG to free Testosterone.";
pub const ASHWAGANDHA_CAPTION: &str = "Cortisol reduction. Cycle: 5 Days ON / 2 OFF.";
pub const WASHOUT_CAPTION: &str = "Resensitizes Adenosine & Dopamine receptors.";

/// Plain-text rendering of every note.
pub fn render_notes() -> String {
    let mut out = String::from(indoc! {"
        Safety Protocols
        ================
    "});
    for (i, note) in NOTES.iter().enumerate() {
        out.push_str(&format!(
            "\n{}. {}\n   Check:  {}\n   Action: {}\n",
            i + 1,
            note.title,
            note.check,
            note.action
        ));
    }
    out
}
