//! Library integration tests.

use setupcheck::SetupError;

#[test]
fn error_types_are_public() {
    let err = SetupError::UnknownEnvType {
        name: "date".into(),
    };
    assert!(err.to_string().contains("date"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> setupcheck::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use setupcheck::cli::{Cli, Commands};
    use clap::Parser;

    let cli = Cli::parse_from(["setupcheck", "schema", "--yaml"]);

    if let Some(Commands::Schema(args)) = cli.command {
        assert!(args.yaml);
    } else {
        panic!("Expected Schema command");
    }
}

#[test]
fn env_type_names_parse() {
    use setupcheck::env::EnvType;

    for ty in EnvType::ALL {
        assert_eq!(ty.as_str().parse::<EnvType>().unwrap(), ty);
    }
    assert!("date".parse::<EnvType>().is_err());
}
