use crate::models::{Phase, Slot};

const CATALOG: &[(&str, &str, Phase)] = &[
    ("auth", "Auth Service", Phase::Foundation),
    ("api-gateway", "API Gateway", Phase::Foundation),
    ("rights-tracking", "Rights Tracking", Phase::Foundation),
    ("brand-mgmt", "Brand Management", Phase::Foundation),
    ("omnivael-hub", "Omnivael Hub", Phase::Content),
    ("music-streaming", "Music Streaming", Phase::Content),
    ("art-nft", "Art & NFT", Phase::Content),
    ("content-mgmt", "Content Mgmt", Phase::Content),
    ("social-mgmt", "Social Media Hub", Phase::Content),
    ("payment", "Payment Processing", Phase::Content),
    ("analytics", "Analytics Engine", Phase::Content),
    ("ai-orchestrator", "AI Orchestrator", Phase::AiAndScale),
    ("marketing-engine", "Marketing Engine", Phase::AiAndScale),
    ("blockchain", "Blockchain Integration", Phase::AiAndScale),
];

/// Fresh, unassigned copy of the static slot catalog.
pub fn seed_slots() -> Vec<Slot> {
    CATALOG
        .iter()
        .map(|&(id, name, phase)| Slot::new(id, name, phase))
        .collect()
}
