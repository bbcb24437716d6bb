//! The `initialuom` management command.
//!
//! Seeds the unit-of-measure catalogue for a business type. The seed is an
//! idempotent two-pass upsert: pass one creates-or-updates every record by
//! unique code, pass two resolves the optional base-unit self-references once
//! all codes exist, so the declaration order of derived units never matters.

use async_trait::async_trait;

use adsuite_core::{ErpError, ErpResult, Settings};
use adsuite_masterdata::uom::UomStore;

use crate::command::ManagementCommand;

/// One unit-of-measure seed entry.
#[derive(Debug, Clone, Copy)]
pub struct UomSeed {
    /// The unique machine-readable code.
    pub code: &'static str,
    /// The localized display name.
    pub name: &'static str,
    /// The code of the base unit this unit is denominated in, if any.
    pub base_uom: Option<&'static str>,
}

const fn seed(code: &'static str, name: &'static str) -> UomSeed {
    UomSeed {
        code,
        name,
        base_uom: None,
    }
}

const fn derived(code: &'static str, name: &'static str, base_uom: &'static str) -> UomSeed {
    UomSeed {
        code,
        name,
        base_uom: Some(base_uom),
    }
}

/// The unit catalogue for the CREATIVE business type.
pub const CREATIVE_UOMS: &[UomSeed] = &[
    seed("UOM_PIECE", "Sản phẩm"),
    seed("UOM_SECTION", "Buổi"),
    seed("UOM_WORD", "Chữ"),
    derived("UOM_POST_LOWER_300", "Bài dưới 300 chữ", "UOM_WORD"),
    derived("UOM_POST_301_500", "Bài 301 - 500 chữ", "UOM_WORD"),
    derived("UOM_POST_501_700", "Bài 501 - 700 chữ", "UOM_WORD"),
    derived("UOM_POST_701_900", "Bài 701 - 900 chữ", "UOM_WORD"),
    derived("UOM_POST_901_1000", "Bài 901 - 1000 chữ", "UOM_WORD"),
    derived("UOM_POST_1001_3000", "Bài 1001 - 3000 chữ", "UOM_WORD"),
    derived("UOM_POST_UPPER_3000", "Bài trên 3000 chữ", "UOM_WORD"),
    seed("UOM_SECOND", "Giây"),
    derived("UOM_SCRIPT_30_45", "Kịch bản 30-45s", "UOM_SECOND"),
    derived("UOM_SCRIPT_60", "Kịch bản 60s", "UOM_SECOND"),
    derived("UOM_SCRIPT_120", "Kịch bản 120s", "UOM_SECOND"),
    derived("UOM_SCRIPT_180", "Kịch bản 180s", "UOM_SECOND"),
];

/// Returns the seed catalogue for a business type, if one is defined.
pub fn catalogue_for(business_type: &str) -> Option<&'static [UomSeed]> {
    match business_type.to_uppercase().as_str() {
        "CREATIVE" => Some(CREATIVE_UOMS),
        _ => None,
    }
}

/// Applies a seed catalogue to the store with the two-pass upsert.
///
/// Pass one writes every record by code; pass two re-reads each record and
/// resolves its base-unit reference. A seed entry referencing a code absent
/// from both the catalogue and the store surfaces as
/// [`ErpError::DoesNotExist`] and aborts the run.
pub fn apply_seeds(store: &UomStore, seeds: &[UomSeed]) -> ErpResult<()> {
    for entry in seeds {
        store.update_or_create(entry.code, entry.name)?;
    }
    for entry in seeds {
        let mut uom = store.get_by_code(entry.code)?;
        if let Some(base_code) = entry.base_uom {
            let base = store.get_by_code(base_code)?;
            uom.base_uom_id = Some(base.id);
            store.save(uom)?;
        }
    }
    Ok(())
}

/// Seeds the unit-of-measure catalogue.
pub struct InitialUomCommand {
    store: UomStore,
}

impl InitialUomCommand {
    /// Creates the command bound to the store it seeds into.
    pub fn new(store: UomStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ManagementCommand for InitialUomCommand {
    fn name(&self) -> &'static str {
        "initialuom"
    }

    fn help(&self) -> &'static str {
        "Create UOM objects"
    }

    fn add_arguments(&self, cmd: clap::Command) -> clap::Command {
        cmd.arg(
            clap::Arg::new("business_type")
                .help("Business Type")
                .required(true)
                .value_parser(["CREATIVE"]),
        )
    }

    async fn handle(
        &self,
        matches: &clap::ArgMatches,
        _settings: &Settings,
    ) -> Result<(), ErpError> {
        let business_type = matches
            .get_one::<String>("business_type")
            .map_or("CREATIVE", String::as_str);

        let seeds = catalogue_for(business_type).ok_or_else(|| {
            ErpError::ConfigurationError(format!("Unknown business type: {business_type}"))
        })?;

        apply_seeds(&self.store, seeds)?;

        tracing::info!(count = seeds.len(), "seeded unit of measure catalogue");
        println!("Successfully created UOM objects.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_for_known_type() {
        let seeds = catalogue_for("CREATIVE").unwrap();
        assert_eq!(seeds.len(), 15);
        assert!(catalogue_for("creative").is_some());
    }

    #[test]
    fn test_catalogue_for_unknown_type() {
        assert!(catalogue_for("RETAIL").is_none());
    }

    #[test]
    fn test_apply_seeds_creates_all() {
        let store = UomStore::new();
        apply_seeds(&store, CREATIVE_UOMS).unwrap();
        assert_eq!(store.count(), CREATIVE_UOMS.len());
        assert_eq!(store.get_by_code("UOM_WORD").unwrap().name, "Chữ");
    }

    #[test]
    fn test_apply_seeds_resolves_bases() {
        let store = UomStore::new();
        apply_seeds(&store, CREATIVE_UOMS).unwrap();
        let word = store.get_by_code("UOM_WORD").unwrap();
        let post = store.get_by_code("UOM_POST_LOWER_300").unwrap();
        assert_eq!(post.base_uom_id, Some(word.id));
    }

    #[test]
    fn test_apply_seeds_order_independent() {
        // Derived unit declared before its base resolves anyway.
        let seeds = [
            derived("UOM_SCRIPT_60", "Kịch bản 60s", "UOM_SECOND"),
            seed("UOM_SECOND", "Giây"),
        ];
        let store = UomStore::new();
        apply_seeds(&store, &seeds).unwrap();
        let second = store.get_by_code("UOM_SECOND").unwrap();
        let script = store.get_by_code("UOM_SCRIPT_60").unwrap();
        assert_eq!(script.base_uom_id, Some(second.id));
    }

    #[test]
    fn test_apply_seeds_unknown_base_aborts() {
        let seeds = [derived("UOM_SCRIPT_60", "Kịch bản 60s", "UOM_MISSING")];
        let store = UomStore::new();
        let err = apply_seeds(&store, &seeds).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_command_rejects_unknown_business_type() {
        let cmd = InitialUomCommand::new(UomStore::new());
        let cli = cmd.add_arguments(clap::Command::new("initialuom"));
        let result = cli.try_get_matches_from(["initialuom", "RETAIL"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_command_requires_business_type() {
        let cmd = InitialUomCommand::new(UomStore::new());
        let cli = cmd.add_arguments(clap::Command::new("initialuom"));
        let result = cli.try_get_matches_from(["initialuom"]);
        assert!(result.is_err());
    }
}
