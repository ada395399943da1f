use super::{parse_key_value, run_suitability, SuitabilityRunSummary};
use crate::{config::SuitabilityConfiguration, engine::NativeEngine, SuitabilityError};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command line tool scoring residential buildings by their proximity to
/// amenities, combining weighted distance criteria into a 1-5 suitability grade
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct SuitabilityApp {
    #[command(subcommand)]
    pub op: SuitabilityOperation,
}

#[derive(Debug, Clone, Subcommand)]
pub enum SuitabilityOperation {
    /// run the suitability model over a workspace
    Run {
        /// workspace directory holding the geodatabase folders. defaults to the
        /// current working directory.
        workspace: Option<String>,
        /// TOML or JSON run configuration. when omitted, the default criterion
        /// table is used.
        #[arg(long)]
        configuration_file: Option<String>,
        /// distance thresholds of a criterion as NAME=LIST, where LIST is a
        /// semicolon-delimited list of integers. example: economic=200;500;1000
        #[arg(long = "distances", value_parser = parse_key_value)]
        distances: Vec<(String, String)>,
        /// weight of a criterion as NAME=INT. example: economic=3
        #[arg(long = "weight", value_parser = parse_key_value)]
        weights: Vec<(String, String)>,
    },
}

impl SuitabilityOperation {
    pub fn run(self) -> Result<SuitabilityRunSummary, SuitabilityError> {
        match self {
            SuitabilityOperation::Run {
                workspace,
                configuration_file,
                distances,
                weights,
            } => {
                let mut conf = match &configuration_file {
                    Some(f) => SuitabilityConfiguration::try_from(f)?,
                    None => SuitabilityConfiguration::default(),
                };
                conf.apply_overrides(&distances, &weights)?;
                let root = match workspace {
                    Some(w) => PathBuf::from(w),
                    None => std::env::current_dir()?,
                };
                let engine = NativeEngine::from(&conf);
                run_suitability(&root, &conf, &engine)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_repeated_overrides() {
        let app = SuitabilityApp::try_parse_from([
            "suitmap",
            "run",
            "/tmp/salzburg",
            "--distances",
            "economic=200;500;1000",
            "--weight",
            "economic=3",
            "--distances",
            "bus=100;300",
            "--weight",
            "bus=1",
        ])
        .unwrap();
        match app.op {
            SuitabilityOperation::Run {
                workspace,
                configuration_file,
                distances,
                weights,
            } => {
                assert_eq!(workspace.as_deref(), Some("/tmp/salzburg"));
                assert_eq!(configuration_file, None);
                assert_eq!(
                    distances,
                    vec![
                        (String::from("economic"), String::from("200;500;1000")),
                        (String::from("bus"), String::from("100;300")),
                    ]
                );
                assert_eq!(
                    weights,
                    vec![
                        (String::from("economic"), String::from("3")),
                        (String::from("bus"), String::from("1")),
                    ]
                );
            }
        }
    }

    #[test]
    fn rejects_malformed_override() {
        let result = SuitabilityApp::try_parse_from(["suitmap", "run", "--weight", "economic"]);
        assert!(result.is_err());
    }
}
