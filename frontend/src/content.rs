//! Static page copy.

pub struct Card {
    pub icon: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

pub struct Item {
    pub title: &'static str,
    pub desc: &'static str,
}

pub struct Category {
    pub title: &'static str,
    pub points: [&'static str; 4],
}

pub const HERO_BULLETS: [(&str, &str); 3] = [
    ("⇄", "Auditable workflows replacing manual coordination."),
    ("▤", "One operational brain for ERP, machines, and staff."),
    ("⚡", "Throughput optimization without legacy system replacement."),
];

pub const PAIN_POINTS: [Item; 3] = [
    Item {
        title: "Siloed Intelligence",
        desc: "Process flows exist only in people's heads, creating massive operational fragility.",
    },
    Item {
        title: "Manual Firefighting",
        desc: "Too much follow-up, status checks, and approvals consuming engineering bandwidth.",
    },
    Item {
        title: "Outdated Visibility",
        desc: "Reporting takes days and is already obsolete by the time it reaches the board.",
    },
];

pub const PILLARS: [Card; 3] = [
    Card {
        icon: "⌕",
        title: "Connect",
        desc: "Machines, People, Software, and Data connected by real-time workflows.",
    },
    Card {
        icon: "⚙",
        title: "Orchestrate",
        desc: "AI Agents monitor workflows and govern processes based on your specific logic.",
    },
    Card {
        icon: "⛨",
        title: "Governor",
        desc: "Exception-based reporting and decision alerts for total operational command.",
    },
];

pub const CATEGORIES: [Category; 4] = [
    Category {
        title: "Production",
        points: ["MO tracking", "WIP visibility", "Bottleneck alerts", "Dispatch priority"],
    },
    Category {
        title: "Quality",
        points: ["QC workflows", "Deviation tracking", "Audit logs", "Approval chains"],
    },
    Category {
        title: "Procurement",
        points: ["Auto PR → PO", "Low stock alerts", "Vendor follow-ups", "Batch tracking"],
    },
    Category {
        title: "Reporting",
        points: ["Real-time dashboards", "Ops summary bots", "Exception alerts", "Decision triggers"],
    },
];

pub const PROCESS_STEPS: [Item; 4] = [
    Item {
        title: "Operations Mapping",
        desc: "We map your real floor-level workflows and coordination points.",
    },
    Item {
        title: "System Architecture",
        desc: "Design the logic layer, rules, exceptions, and ownership flows.",
    },
    Item {
        title: "Integrate & Build",
        desc: "Connect n8n + AI Agents to your legacy ERP and spreadsheets.",
    },
    Item {
        title: "Harden & Scale",
        desc: "Set up logging, retries, alerts, and enterprise-grade auditing.",
    },
];

pub const IDEAL_PARTNER: [&str; 4] = [
    "Operational maturity focus",
    "Engineering coordination pain",
    "Ready for predictable execution",
    "Systemic process infrastructure",
];

pub const INCOMPATIBLE: [&str; 4] = [
    "One-off chatbot requests",
    "Magic tool fix hunters",
    "Resistant to process change",
    "Fragmented leadership buy-in",
];

pub const FOOTER_LINKS: [&str; 4] = ["Automation", "Orchestration", "Governance", "Optimization"];

/// Stagger for the `index`-th item of a list, `step_ms` apart.
pub fn stagger(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(step_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_steps_linearly() {
        assert_eq!(stagger(0, 100), 0);
        assert_eq!(stagger(2, 150), 300);
    }

    #[test]
    fn stagger_saturates() {
        assert_eq!(stagger(usize::MAX, 100), u32::MAX);
    }
}
