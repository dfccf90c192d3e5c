//! Built-in model catalog
//!
//! The selectable model presets. The catalog is a fixed, ordered table that
//! is never modified at runtime.

use serde::Serialize;

/// Accent colour family used when drawing a model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Purple,
    Blue,
    Green,
}

impl Accent {
    /// Gradient start and end, as RGB
    pub fn gradient(self) -> ((u8, u8, u8), (u8, u8, u8)) {
        match self {
            Accent::Purple => ((168, 85, 247), (219, 39, 119)),
            Accent::Blue => ((59, 130, 246), (8, 145, 178)),
            Accent::Green => ((34, 197, 94), (5, 150, 105)),
        }
    }
}

/// Icon shown on a model card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelIcon {
    Brain,
    Zap,
    Shield,
}

impl ModelIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            ModelIcon::Brain => "✺",
            ModelIcon::Zap => "ϟ",
            ModelIcon::Shield => "◈",
        }
    }
}

/// Static description of a selectable model
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub capabilities: &'static [&'static str],
    pub accent: Accent,
    pub icon: ModelIcon,
}

static MODELS: [ModelDescriptor; 3] = [
    ModelDescriptor {
        id: "llama4-maverick",
        name: "Llama 4 Maverick",
        description: "Cutting-edge model with advanced reasoning \
                      capabilities and creative thinking.",
        capabilities: &["Creative Writing", "Complex Reasoning", "Code Generation"],
        accent: Accent::Purple,
        icon: ModelIcon::Brain,
    },
    ModelDescriptor {
        id: "shisa-v2",
        name: "Shisa V2",
        description: "Optimized for precision and accuracy in technical and analytical tasks.",
        capabilities: &["Technical Analysis", "Data Processing", "Research"],
        accent: Accent::Blue,
        icon: ModelIcon::Zap,
    },
    ModelDescriptor {
        id: "nemotron-49b",
        name: "Nemotron 49B",
        description: "Large-scale model designed for enterprise \
                      applications and complex workflows.",
        capabilities: &["Enterprise Solutions", "Multi-step Tasks", "Advanced Analytics"],
        accent: Accent::Green,
        icon: ModelIcon::Shield,
    },
];

/// All models, in catalog order
pub fn all() -> &'static [ModelDescriptor] {
    &MODELS
}

/// Find a model by id
pub fn lookup(id: &str) -> Option<&'static ModelDescriptor> {
    MODELS.iter().find(|model| model.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order() {
        let ids: Vec<_> = all().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec!["llama4-maverick", "shisa-v2", "nemotron-49b"]);
    }

    #[test]
    fn test_lookup_known_ids() {
        for model in all() {
            let found = lookup(model.id).expect("model should be registered");
            assert_eq!(found, model);
        }

        let shisa = lookup("shisa-v2").unwrap();
        assert_eq!(shisa.name, "Shisa V2");
        assert_eq!(shisa.accent, Accent::Blue);
        assert_eq!(
            shisa.capabilities,
            &["Technical Analysis", "Data Processing", "Research"]
        );
    }

    #[test]
    fn test_lookup_unknown_ids() {
        assert!(lookup("").is_none());
        assert!(lookup("gpt-4").is_none());
        assert!(lookup("Shisa-V2").is_none());
        assert!(lookup(" shisa-v2").is_none());
    }

    #[test]
    fn test_ids_are_unique() {
        for (i, model) in all().iter().enumerate() {
            assert!(all()[i + 1..].iter().all(|other| other.id != model.id));
        }
    }

    #[test]
    fn test_serializes_for_listing() {
        let json = serde_json::to_value(lookup("nemotron-49b").unwrap()).unwrap();
        assert_eq!(json["id"], "nemotron-49b");
        assert_eq!(json["accent"], "green");
        assert_eq!(json["icon"], "shield");
        assert_eq!(json["capabilities"][1], "Multi-step Tasks");
    }

    #[test]
    fn test_descriptions_read_as_one_sentence() {
        assert_eq!(
            lookup("llama4-maverick").unwrap().description,
            "Cutting-edge model with advanced reasoning capabilities and creative thinking."
        );
        assert_eq!(
            lookup("nemotron-49b").unwrap().description,
            "Large-scale model designed for enterprise applications and complex workflows."
        );
    }
}
