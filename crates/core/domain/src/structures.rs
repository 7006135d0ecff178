//! 常见集雨/回灌结构的静态目录。

use serde::Serialize;

/// 单个结构的参考资料。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub suitability: &'static [&'static str],
    pub typical_dims: &'static str,
    pub materials: &'static [&'static str],
    pub est_cost: &'static str,
    pub maintenance: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<&'static str>,
}

pub static CATALOG: [StructureInfo; 10] = [
    StructureInfo {
        name: "RCC tank",
        description: "Reinforced concrete storage tank with first-flush and filtration suitable for rooftop collection.",
        suitability: &["Urban rooftops", "Limited ground space", "Potable with treatment"],
        typical_dims: "2m × 2m × 2.5m (10 m³) or modular per demand",
        materials: &["RCC", "PVC/HDPE pipes", "First-flush valve", "Sand/charcoal filter"],
        est_cost: "₹ 60,000 – ₹ 1,80,000 for 5–15 m³ (varies by region)",
        maintenance: &[
            "Quarterly cleaning",
            "Filter media replacement yearly",
            "Inspect for cracks/leaks",
        ],
        notes: None,
    },
    StructureInfo {
        name: "Recharge pit",
        description: "Percolation pit to recharge groundwater using filtered rooftop/yard runoff.",
        suitability: &["Areas with permeable soil", "Space available in setback", "Reduce flooding"],
        typical_dims: "1.5m × 1.5m × 2–3m depth with gravel and sand filter",
        materials: &["Bricks/RCC rings", "Gravel & sand", "Geo-textile", "PVC pipes"],
        est_cost: "₹ 25,000 – ₹ 70,000 depending on depth & lining",
        maintenance: &[
            "Desilt before monsoon",
            "Inspect inlets",
            "Replace clogged media as needed",
        ],
        notes: None,
    },
    StructureInfo {
        name: "Percolation trench",
        description: "Linear trench to intercept and recharge runoff along plot periphery.",
        suitability: &["Large plots", "Parking and landscapes", "Reduce surface runoff"],
        typical_dims: "0.6–1m wide × 1.5–2m deep, length as required",
        materials: &["Bricks/stones", "Gravel/sand", "Perforated pipes"],
        est_cost: "₹ 1,200 – ₹ 2,500 per running meter",
        maintenance: &["Desilt chambers", "Remove debris", "Maintain vegetative cover"],
        notes: None,
    },
    StructureInfo {
        name: "Rain barrel",
        description: "Small capacity HDPE barrel connected to downpipe for basic non-potable reuse.",
        suitability: &["Small homes", "Gardening", "Low cost"],
        typical_dims: "200–500 L drums, elevate on stand with tap",
        materials: &["HDPE barrel", "Tap & overflow pipe", "Leaf screen"],
        est_cost: "₹ 3,000 – ₹ 10,000",
        maintenance: &["Clean screen monthly", "Flush after first rains", "Keep covered"],
        notes: None,
    },
    StructureInfo {
        name: "Recharge well",
        description: "Deep bore with recharge filter to inject treated runoff into aquifer where allowed.",
        suitability: &["High runoff sites", "Regulatory approval", "Deeper water table"],
        typical_dims: "150–300mm dia to 30–60m depth with filter pack",
        materials: &["PVC casing", "Gravel pack", "Silt trap", "Filter media"],
        est_cost: "₹ 80,000 – ₹ 2,50,000",
        maintenance: &[
            "Desilt traps",
            "Test water quality periodically",
            "Regulatory compliance",
        ],
        notes: None,
    },
    StructureInfo {
        name: "Modular underground tank",
        description: "Subsurface modular PP crate tank wrapped in geotextile for high-volume storage under driveways/yards.",
        suitability: &["Space constraints", "Driveway/parking underlay", "Large storage"],
        typical_dims: "Modular crates assembled to 5–50 m³, burial depth 1–2.5 m",
        materials: &[
            "PP crates",
            "Geotextile",
            "HDPE liner (optional)",
            "Inlet/outlet pipes",
            "Access chamber",
        ],
        est_cost: "₹ 3,500 – ₹ 6,000 per m³ + excavation",
        maintenance: &[
            "Inspect access chamber",
            "Flush silt trap pre-monsoon",
            "Check liner integrity",
        ],
        notes: None,
    },
    StructureInfo {
        name: "Recharge shaft",
        description: "Vertical shaft with filter media to rapidly recharge deeper strata; used where water table is deep.",
        suitability: &["Large campuses", "High runoff areas", "Deep aquifer recharge"],
        typical_dims: "0.6–1 m dia × 10–20 m depth with gravel/sand filter",
        materials: &["Precast RCC rings", "Gravel/sand", "Silt trap", "PVC pipes"],
        est_cost: "₹ 1,20,000 – ₹ 3,00,000 (site dependent)",
        maintenance: &["Desilt silt traps", "Inspect media annually", "Ensure safety cover"],
        notes: None,
    },
    StructureInfo {
        name: "Infiltration gallery",
        description: "Subsurface gravel trench with perforated pipes to distribute and infiltrate filtered runoff.",
        suitability: &["Sandy soils", "Landscape areas", "Distributed recharge"],
        typical_dims: "0.8–1 m wide × 1.5–2 m deep; length as required",
        materials: &["Perforated HDPE pipes", "Gravel", "Geotextile", "Inspection ports"],
        est_cost: "₹ 1,800 – ₹ 3,000 per running meter",
        maintenance: &[
            "Vacuum clean inspection ports",
            "Replace clogged sections",
            "Maintain pretreatment",
        ],
        notes: None,
    },
    StructureInfo {
        name: "Soak pit",
        description: "Circular percolation pit filled with brick bats/gravel for small plot recharge.",
        suitability: &["Individual houses", "Low budget", "Non-clayey soils"],
        typical_dims: "1–1.2 m dia × 2–3 m depth",
        materials: &["Brick bats", "Gravel", "PVC pipe", "Top slab with cover"],
        est_cost: "₹ 15,000 – ₹ 40,000",
        maintenance: &["Remove silt annually", "Prevent direct debris entry", "Cover securely"],
        notes: None,
    },
    StructureInfo {
        name: "Filter chamber",
        description: "Two-chamber sand/charcoal filter for pretreatment of rooftop runoff before storage/recharge.",
        suitability: &["All systems as pretreatment", "Roof runoff polishing"],
        typical_dims: "0.6 m × 0.6 m × 0.9 m per chamber (customizable)",
        materials: &["Bricks/RCC", "Sand", "Gravel", "Charcoal", "Mesh screens"],
        est_cost: "₹ 8,000 – ₹ 25,000",
        maintenance: &[
            "Replace media yearly",
            "Clean screens monthly",
            "Bypass during first flush if needed",
        ],
        notes: None,
    },
];

/// 按名称查找：先精确匹配（忽略大小写与首尾空白），再取首个包含查询词的条目。
pub fn find_structure(query: &str) -> Option<&'static StructureInfo> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    CATALOG
        .iter()
        .find(|info| info.name.to_lowercase() == needle)
        .or_else(|| {
            CATALOG
                .iter()
                .find(|info| info.name.to_lowercase().contains(&needle))
        })
}
