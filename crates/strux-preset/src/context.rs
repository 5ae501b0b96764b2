//! Viewer context and preset dispatch

use std::sync::Arc;

use strux_assembly::{assemble, build_assembly, select_assembly_for_targets};
use strux_color::{Color, NamedColors};
use strux_mol::{Model, Structure};
use strux_select::{resolve_with_fallback, Loci, Target};
use strux_settings::{id, Settings};

use crate::error::PresetResult;
use crate::preset::{ColorTheme, PresetOutput, PresetParams};
use crate::taxonomy::{default_taxonomy, targets_taxonomy};
use crate::validation::{score_colors, ResidueScores, ScoreThresholds};

/// Session state presets read from: settings and the named color palette
#[derive(Debug, Clone, Default)]
pub struct ViewerContext {
    settings: Settings,
    colors: NamedColors,
}

impl ViewerContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        ViewerContext {
            settings,
            colors: NamedColors::default(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    pub fn colors(&self) -> &NamedColors {
        &self.colors
    }

    pub fn colors_mut(&mut self) -> &mut NamedColors {
        &mut self.colors
    }

    /// Parse a color setting (a palette name or `#RRGGBB`)
    fn color_setting(&self, setting: u16) -> PresetResult<Color> {
        let value = self.settings.get_string(setting);
        Ok(self.colors.parse(&value)?)
    }

    // =========================================================================
    // Structures
    // =========================================================================

    /// The structure a preset works on.
    ///
    /// Uses `assembly_id`, or the `default_assembly_id` setting. Models
    /// without an assembly table yield the model-level structure.
    pub fn structure_for(&self, model: &Arc<Model>, assembly_id: Option<&str>) -> PresetResult<Structure> {
        if model.assembly_gen().is_none() {
            log::warn!(
                "{} has no assembly table, using the model structure",
                model.entry_id()
            );
            return Ok(Structure::from_model(model));
        }
        let id = match assembly_id {
            Some(id) => id.to_string(),
            None => self.settings.get_string(id::default_assembly_id),
        };
        Ok(build_assembly(model, &id)?)
    }

    /// Resolve `target` in `structure`, retrying on the model-level structure
    /// when nothing matches there
    pub fn resolve_focus(&self, model: &Arc<Model>, structure: &Structure, target: &Target) -> Loci {
        resolve_with_fallback(target, structure, &Structure::from_model(model))
    }

    // =========================================================================
    // Presets
    // =========================================================================

    pub fn apply_preset(&self, model: &Arc<Model>, params: &PresetParams) -> PresetResult<PresetOutput> {
        self.apply_preset_with_scores(model, params, None)
    }

    /// Apply `params`; `scores` is only read by the validation preset
    pub fn apply_preset_with_scores(
        &self,
        model: &Arc<Model>,
        params: &PresetParams,
        scores: Option<&dyn ResidueScores>,
    ) -> PresetResult<PresetOutput> {
        log::debug!("Applying {} preset to {}", params.name(), model.entry_id());
        let base = model.entry_id();
        let water_hidden = self.settings.get_bool(id::water_hidden);

        match params {
            PresetParams::Standard {
                assembly_id,
                selection,
                color,
            } => {
                let structure = self.structure_for(model, assembly_id.as_deref())?;
                let expressions = match selection {
                    Some(spec) => spec.taxonomy(base, *color)?,
                    None => default_taxonomy(base, water_hidden),
                };
                Ok(PresetOutput::new(structure, expressions))
            }

            PresetParams::Validation {
                assembly_id,
                thresholds,
            } => {
                let structure = self.structure_for(model, assembly_id.as_deref())?;
                let expressions = default_taxonomy(base, water_hidden);
                let Some(scores) = scores else {
                    log::warn!("Validation preset without scores, using default colors");
                    return Ok(PresetOutput::new(structure, expressions));
                };
                let thresholds =
                    thresholds.unwrap_or_else(|| ScoreThresholds::from_settings(&self.settings));
                let colors = score_colors(&structure, scores, &thresholds, &self.colors)?;
                Ok(PresetOutput::new(structure, expressions)
                    .with_colors(colors, ColorTheme::Confidence))
            }

            PresetParams::Alignment {
                assembly_id,
                selections,
                colors,
            } => {
                let structure = self.structure_for(model, assembly_id.as_deref())?;
                let assembled = assemble(&structure, selections, colors)?;
                if !assembled.skipped.is_empty() {
                    log::warn!(
                        "{} of {} alignment selections matched nothing",
                        assembled.skipped.len(),
                        selections.len()
                    );
                }
                let base_color = self.color_setting(id::base_color)?;
                let expressions = default_taxonomy(base, water_hidden);
                Ok(PresetOutput::new(assembled.structure, expressions)
                    .with_colors(assembled.colors, ColorTheme::ResidueLookup)
                    .with_base_color(base_color))
            }

            PresetParams::Motif { targets, color } => {
                let structure = match model.assembly_gen() {
                    Some(table) => {
                        let selected = select_assembly_for_targets(Some(table), targets);
                        let known = model.assembly_ids();
                        match known.iter().find(|id| **id == selected).or(known.first()) {
                            Some(assembly_id) => {
                                if *assembly_id != selected {
                                    log::warn!(
                                        "{} has no assembly {}, using assembly {}",
                                        model.entry_id(),
                                        selected,
                                        assembly_id
                                    );
                                }
                                build_assembly(model, assembly_id)?
                            }
                            None => Structure::from_model(model),
                        }
                    }
                    None => Structure::from_model(model),
                };
                let color = match color {
                    Some(c) => *c,
                    None => self.color_setting(id::motif_color)?,
                };
                let expressions = targets_taxonomy(base, targets, Some(color));
                Ok(PresetOutput::new(structure, expressions))
            }

            PresetParams::Empty => Ok(PresetOutput::new(Structure::from_model(model), Vec::new())),
        }
    }
}
