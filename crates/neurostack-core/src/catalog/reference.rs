//! The built-in protocol table.

use indoc::indoc;

use super::item::{HourWindow, Item, Phase, PhaseTitle, SpecialCycle};

pub const MORNING: HourWindow = HourWindow::new(0, 11);
pub const AFTERNOON: HourWindow = HourWindow::new(11, 18);
pub const EVENING: HourWindow = HourWindow::new(18, 24);

pub(super) fn reference_phases() -> Vec<Phase> {
    vec![foundation(), learn(), perform(), recover()]
}

fn foundation() -> Phase {
    Phase {
        title: PhaseTitle::Foundation,
        window: MORNING,
        axis: "The Hormonal Base".into(),
        focus: "Daily foundation: minerals, methylation and free testosterone.".into(),
        guidance: None,
        items: vec![
            Item::new("Zinc", "15-30mg", "Picolinate/Bisglycinate", "Testosterone/Dopamine")
                .weekend_safe(),
            Item::new("B-Complex", "1 Serving", "Must possess P-5-P & 5-MTHF", "Methylation")
                .weekend_safe(),
            Item::new("Tongkat Ali", "200-400mg", "LJ100/200:1", "Free T / Cortisol Control")
                .weekend_safe(),
            Item::new("Boron", "6-9mg", "Citrate", "SHBG Suppression")
                .weekend_safe()
                .cycle(SpecialCycle::Boron),
            Item::new("Creatine", "5g", "Monohydrate", "ATP Buffer").weekend_safe(),
        ],
    }
}

fn learn() -> Phase {
    Phase {
        title: PhaseTitle::Learn,
        window: MORNING,
        axis: "The Cholinergic Axis".into(),
        focus: "Acetylcholine synthesis and mitochondrial fueling.".into(),
        guidance: Some("Take 60-90 minutes post-wake on an empty stomach.".into()),
        items: vec![
            Item::new("Alpha-GPC", "300mg", "50% or 99%", "Choline Donor"),
            Item::new("ALCAR", "500mg", "Acetyl-L-Carnitine", "Mitochondrial Fuel").weekend_safe(),
            Item::new("L-Tyrosine", "1000mg", "Free Form (Not NALT)", "Dopamine Fuel"),
            Item::new("L-Theanine", "100mg", "Standardized", "Jitter Control"),
            Item::new("Caffeine", "50-80mg", "Coffee/Matcha", "Adenosine Antagonist").optional(),
            Item::new("Lion's Mane", "1000mg", "8:1 Fruiting Body", "NGF Stimulation")
                .weekend_safe(),
            Item::new("Uridine", "250mg", "Monohydrate (UMP)", "Synaptogenesis")
                .weekend_safe()
                .optional(),
        ],
    }
}

fn perform() -> Phase {
    Phase {
        title: PhaseTitle::Perform,
        window: AFTERNOON,
        axis: "The Dopaminergic Axis".into(),
        focus: "Dopamine preservation (MAO-B inhibition) and ATP generation.".into(),
        guidance: Some(String::from(indoc!(
            "
            TIMING CRITICAL: Do not take within 6 hours of sleep.
            Do not mix directly with L-Tyrosine."
        ))),
        items: vec![
            Item::new("Sabroxy", "100mg", "Oroxylum Indicum", "MAO-B Inhibition"),
            Item::new("Cordyceps", "1000mg", "Militaris (Fruiting Body)", "ATP/Stamina"),
            Item::new("Rhodiola", "300mg", "3% Rosavins", "Anti-Fatigue/Crash"),
        ],
    }
}

fn recover() -> Phase {
    Phase {
        title: PhaseTitle::Recover,
        window: EVENING,
        axis: "The Restoration Axis".into(),
        focus: "GABAergic modulation, cortisol clearance, and sleep architecture.".into(),
        guidance: None,
        items: vec![
            Item::new(
                "Magnesium",
                "2000mg (target)",
                "L-Threonate (Magtein)",
                "Neuroplasticity/Sleep",
            )
            .weekend_safe(),
            Item::new("Apigenin", "50mg", "Chamomile Extract", "CD38 Inhibitor/GABA")
                .weekend_safe()
                .optional(),
            Item::new("Phosphatidylserine", "400mg", "Soy-Free", "Cortisol Blocker").weekend_safe(),
            Item::new("Bacopa Monnieri", "300mg", "Synapsa/Bacognize", "Memory Consolidation"),
            Item::new("Fish Oil", "2000mg", "High DHA", "Membrane Structure").weekend_safe(),
            Item::new("Ashwagandha", "300mg", "KSM-66", "Cortisol Crusher")
                .cycle(SpecialCycle::Ashwagandha),
        ],
    }
}
