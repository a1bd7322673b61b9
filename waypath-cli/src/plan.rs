//! Plan command implementation for the waypath CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;
use waypath_core::{
    Category, CityName, GeometryProvider, MapRenderer, PlanError, SiteOrder, TripRequest,
    plan_trip,
};
use waypath_data::FeatureFileProvider;

use crate::render::GeoJsonRenderer;
use crate::{
    ARG_PLAN_CATEGORIES, ARG_PLAN_CITIES, ARG_PLAN_DATA_DIR, ARG_PLAN_DAYS, ARG_PLAN_END,
    ARG_PLAN_ORDER, ARG_PLAN_OUTPUT, ARG_PLAN_REST_STOP, ARG_PLAN_SITES, ARG_PLAN_SITES_PER_DAY,
    ARG_PLAN_START, CliError, ENV_PLAN_END, ENV_PLAN_START,
};

const DEFAULT_CITIES_FILE: &str = "cities.geojson";
const DEFAULT_SITES_FILE: &str = "sites.geojson";
const DEFAULT_DAYS: u8 = 3;
const DEFAULT_SITES_PER_DAY: u8 = 5;

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Plan a multi-day trip between two cities. Sites of the \
                 requested categories lying within the corridor around the \
                 straight line between the city centroids are grouped into \
                 days and written as a GeoJSON FeatureCollection. Options \
                 can come from CLI flags, configuration files, or \
                 environment variables.",
    about = "Plan a trip between two cities"
)]
#[ortho_config(prefix = "WAYPATH")]
pub(crate) struct PlanArgs {
    /// Path to the city layer (.geojson).
    #[arg(long = ARG_PLAN_CITIES, value_name = "path")]
    #[serde(default)]
    pub(crate) cities: Option<Utf8PathBuf>,
    /// Path to the tourism site layer (.geojson).
    #[arg(long = ARG_PLAN_SITES, value_name = "path")]
    #[serde(default)]
    pub(crate) sites: Option<Utf8PathBuf>,
    /// Directory holding `cities.geojson` and `sites.geojson`.
    #[arg(long = ARG_PLAN_DATA_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) data_dir: Option<Utf8PathBuf>,
    /// Comma-separated categories, e.g. "Nature,Culture".
    #[arg(long = ARG_PLAN_CATEGORIES, value_name = "list")]
    #[serde(default)]
    pub(crate) categories: Option<String>,
    /// Starting city.
    #[arg(long = ARG_PLAN_START, value_name = "city")]
    #[serde(default)]
    pub(crate) start: Option<String>,
    /// Destination city.
    #[arg(long = ARG_PLAN_END, value_name = "city")]
    #[serde(default)]
    pub(crate) end: Option<String>,
    /// Number of trip days (1-10, default 3).
    #[arg(long = ARG_PLAN_DAYS, value_name = "n")]
    #[serde(default)]
    pub(crate) days: Option<u8>,
    /// Maximum sites per day (1-20, default 5).
    #[arg(long = ARG_PLAN_SITES_PER_DAY, value_name = "n")]
    #[serde(default)]
    pub(crate) sites_per_day: Option<u8>,
    /// Insert one rest stop into each populated day.
    #[arg(
        long = ARG_PLAN_REST_STOP,
        value_name = "bool",
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    #[serde(default)]
    pub(crate) rest_stop: Option<bool>,
    /// Site order within days: "input" or "along-route".
    #[arg(long = ARG_PLAN_ORDER, value_name = "order")]
    #[serde(default)]
    pub(crate) order: Option<SiteOrder>,
    /// Write the plan here instead of stdout.
    #[arg(long = ARG_PLAN_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlanConfig {
    /// Path to the city layer.
    pub(crate) cities: Utf8PathBuf,
    /// Path to the site layer.
    pub(crate) sites: Utf8PathBuf,
    /// Destination for the rendered plan; stdout when absent.
    pub(crate) output: Option<Utf8PathBuf>,
    /// Validated planning request.
    pub(crate) request: TripRequest,
}

impl PlanConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.cities, ARG_PLAN_CITIES)?;
        Self::require_existing(&self.sites, ARG_PLAN_SITES)?;
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match waypath_fs::file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let start = parse_city(args.start, ARG_PLAN_START, ENV_PLAN_START)?;
        let end = parse_city(args.end, ARG_PLAN_END, ENV_PLAN_END)?;
        let categories = args
            .categories
            .as_deref()
            .map(Category::parse_list)
            .transpose()?
            .unwrap_or_default();
        let request = TripRequest::new(
            categories,
            start,
            end,
            args.days.unwrap_or(DEFAULT_DAYS),
            args.sites_per_day.unwrap_or(DEFAULT_SITES_PER_DAY),
        )
        .map_err(PlanError::from)?
        .with_rest_stop(args.rest_stop.unwrap_or(false))
        .with_order(args.order.unwrap_or_default());

        let data_dir = args.data_dir.unwrap_or_else(|| Utf8PathBuf::from("."));
        let cities = args
            .cities
            .unwrap_or_else(|| data_dir.join(DEFAULT_CITIES_FILE));
        let sites = args
            .sites
            .unwrap_or_else(|| data_dir.join(DEFAULT_SITES_FILE));

        Ok(Self {
            cities,
            sites,
            output: args.output,
            request,
        })
    }
}

fn parse_city(
    value: Option<String>,
    field: &'static str,
    env: &'static str,
) -> Result<CityName, CliError> {
    let name = value.ok_or(CliError::MissingArgument { field, env })?;
    name.parse::<CityName>()
        .map_err(|err| CliError::Plan(PlanError::from(err)))
}

/// Builds the geometry provider for the current plan invocation.
pub(super) trait PlanProviderBuilder {
    fn build(&self, config: &PlanConfig) -> Result<Box<dyn GeometryProvider>, CliError>;
}

pub(super) struct DefaultPlanProviderBuilder;

impl PlanProviderBuilder for DefaultPlanProviderBuilder {
    fn build(&self, config: &PlanConfig) -> Result<Box<dyn GeometryProvider>, CliError> {
        Ok(Box::new(FeatureFileProvider::new(
            config.cities.clone(),
            config.sites.clone(),
        )))
    }
}

pub(super) fn run_plan(args: PlanArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    run_plan_with(args, &DefaultPlanProviderBuilder, writer)
}

pub(super) fn run_plan_with(
    args: PlanArgs,
    builder: &dyn PlanProviderBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = resolve_plan_config(args)?;
    let provider = builder.build(&config)?;
    let plan = plan_trip(provider.as_ref(), &config.request)?;
    let rendered = GeoJsonRenderer.render(&plan)?;
    let mut payload =
        serde_json::to_string_pretty(&rendered).map_err(CliError::SerializeOutput)?;
    payload.push('\n');
    let Some(path) = &config.output else {
        return writer
            .write_all(payload.as_bytes())
            .map_err(CliError::WriteOutput);
    };
    waypath_fs::write_file(path, payload.as_bytes()).map_err(|source| {
        CliError::WriteOutputFile {
            path: path.clone(),
            source,
        }
    })?;
    info!("wrote {} waypoints to {path}", plan.waypoints.len());
    Ok(())
}

fn resolve_plan_config(args: PlanArgs) -> Result<PlanConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<PlanConfig, CliError> {
    let merged = PlanArgs::merge_from_layers(layers).map_err(CliError::from)?;
    PlanConfig::try_from(merged)
}
