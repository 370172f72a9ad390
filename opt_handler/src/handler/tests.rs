//! Unit tests for the handler's parse state machine.

use rstest::{fixture, rstest};

use super::{HELP_OPTION, NonOptionPolicy, OptionHandler};
use crate::builder::with_name;
use crate::error::{ParseError, StateError};

#[fixture]
fn handler() -> OptionHandler {
    OptionHandler::new()
}

#[fixture]
fn region_domain() -> OptionHandler {
    let mut handler = OptionHandler::new();
    handler
        .register_builder(with_name("region").with_short_name("r").require_arg().required())
        .and_then(|h| h.register_builder(with_name("domain").require_arg()))
        .expect("register options");
    handler
}

#[rstest]
fn fresh_handler_knows_help(handler: OptionHandler) {
    let help = handler.options().get(HELP_OPTION).expect("help registered");
    assert_eq!(help.description(), Some("print this help message"));
    assert!(!help.takes_value());
    assert!(!help.is_required());
    assert_eq!(handler.options().len(), 1);
}

#[rstest]
fn help_cannot_be_replaced(mut handler: OptionHandler) {
    handler.register(
        with_name("help")
            .with_description("other")
            .require_arg()
            .build()
            .expect("build spec"),
    );
    assert_eq!(handler.options().len(), 1);
    let help = handler.options().get(HELP_OPTION).expect("help registered");
    assert_eq!(help.description(), Some("print this help message"));
}

#[rstest]
fn queries_before_parse_fail(region_domain: OptionHandler) {
    assert_eq!(region_domain.option_value("region"), Err(StateError::NotParsed));
    assert_eq!(region_domain.has_option("region"), Err(StateError::NotParsed));
    assert_eq!(
        region_domain.command_line().map(|_| ()),
        Err(StateError::NotParsed)
    );
    assert!(!region_domain.is_help_requested());
}

#[rstest]
fn help_short_circuits_required_check(mut region_domain: OptionHandler) {
    let err = region_domain
        .parse(["--help"])
        .expect_err("help must be reported");
    assert!(matches!(err, ParseError::HelpRequested));
    assert!(err.is_missing_option());
    assert!(region_domain.is_help_requested());
    assert_eq!(region_domain.has_option(HELP_OPTION), Ok(true));
}

#[rstest]
fn missing_required_is_not_help(mut region_domain: OptionHandler) {
    let err = region_domain
        .parse(["--domain", "eu-west-1"])
        .expect_err("region is required");
    match err {
        ParseError::MissingRequired { options } => assert_eq!(options, ["region"]),
        other => panic!("expected MissingRequired, got {other:?}"),
    }
    assert!(!region_domain.is_help_requested());
    assert_eq!(region_domain.has_option("domain"), Err(StateError::NotParsed));
}

#[rstest]
fn successful_parse_resets_help_flag(mut region_domain: OptionHandler) {
    assert!(region_domain.parse(["--help"]).is_err());
    assert!(region_domain.is_help_requested());

    region_domain
        .parse(["-r", "us-east-1"])
        .expect("parse region");
    assert!(!region_domain.is_help_requested());
    assert_eq!(region_domain.option_value("region"), Ok(Some("us-east-1")));
    assert_eq!(region_domain.option_value("r"), Ok(Some("us-east-1")));
    assert_eq!(region_domain.has_option(HELP_OPTION), Ok(false));
}

#[rstest]
fn failed_reparse_clears_previous_result(mut region_domain: OptionHandler) {
    region_domain
        .parse(["--region", "eu-west-1"])
        .expect("first parse");
    assert!(region_domain.command_line().is_ok());

    let err = region_domain
        .parse(["--bogus"])
        .expect_err("unknown option must fail");
    assert!(matches!(err, ParseError::Malformed(_)));
    assert_eq!(region_domain.has_option("region"), Err(StateError::NotParsed));
}

#[rstest]
fn absent_argument_list_parses_as_empty(mut handler: OptionHandler) {
    handler
        .register_builder(with_name("domain").require_arg())
        .expect("register domain");
    let parsed = handler
        .parse_or_empty(None::<Vec<String>>)
        .expect("absent list parses");
    assert!(parsed.args().is_empty());
    assert_eq!(handler.option_value("domain"), Ok(None));
    assert!(!handler.is_help_requested());
}

#[rstest]
fn stop_policy_keeps_later_options_as_arguments(mut region_domain: OptionHandler) {
    let parsed = region_domain
        .parse_with(
            ["--region", "eu", "run", "--domain", "x"],
            NonOptionPolicy::Stop,
        )
        .expect("parse with stop policy");
    assert_eq!(parsed.args(), ["run", "--domain", "x"]);
    assert!(!parsed.has_option("domain"));
}

#[rstest]
fn collect_policy_keeps_parsing_after_arguments(mut region_domain: OptionHandler) {
    let parsed = region_domain
        .parse(["--region", "eu", "run"])
        .expect("parse with collect policy");
    assert_eq!(parsed.args(), ["run"]);
    assert_eq!(parsed.option_value("region"), Some("eu"));
}
