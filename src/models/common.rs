use serde::Serialize;

/// Metadata for a hosted text-to-image model.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ModelInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub provider: &'static str,
    pub description: &'static str,
}

/// Models exposed by default, in display order.
pub static SUPPORTED_MODELS: &[ModelInfo] = &[
    ModelInfo {
        id: "sd-community/sdxl-flash",
        name: "SDXL Flash",
        provider: "SD Community",
        description: "Distilled SDXL variant tuned for fast generation.",
    },
    ModelInfo {
        id: "runwayml/stable-diffusion-v1-5",
        name: "Stable Diffusion v1.5",
        provider: "Runway",
        description: "Widely used Stable Diffusion baseline with solid negative prompt support.",
    },
    ModelInfo {
        id: "Kwai-Kolors/Kolors",
        name: "Kolors",
        provider: "Kwai",
        description: "Photorealistic diffusion model with strong prompt adherence.",
    },
];

impl ModelInfo {
    /// Look up a model by its hub identifier.
    pub fn by_id(id: &str) -> Option<&'static ModelInfo> {
        SUPPORTED_MODELS.iter().find(|m| m.id == id)
    }

    /// Look up a model by hub id or display name. Name matching ignores case.
    pub fn resolve(id_or_name: &str) -> Option<&'static ModelInfo> {
        ModelInfo::by_id(id_or_name).or_else(|| {
            SUPPORTED_MODELS
                .iter()
                .find(|m| m.name.eq_ignore_ascii_case(id_or_name))
        })
    }

    pub fn default_model() -> &'static ModelInfo {
        &SUPPORTED_MODELS[0]
    }
}
