//! Unit tests for option builder state accumulation.

use rstest::rstest;

use super::{OptionBuilder, with_name};
use crate::error::BuildError;
use crate::spec::{Arity, OptionSpec, TypeTag};

#[test]
fn build_without_long_name_fails() {
    let err = OptionBuilder::new()
        .with_short_name("foo")
        .build()
        .expect_err("builder without a long name must fail");
    assert_eq!(err, BuildError::MissingLongName);
}

#[test]
fn build_defaults_arg_name_to_uppercase_long_name() {
    let spec = with_name("longName").build().expect("build spec");
    assert_eq!(spec.long_name(), "longName");
    assert_eq!(spec.arg_name(), "LONGNAME");
    assert!(!spec.is_required());
    assert_eq!(spec.description(), None);
    assert_eq!(spec.short_name(), None);
    assert_eq!(spec.arity(), Arity::None);
    assert!(!spec.takes_value());
}

#[test]
fn build_keeps_short_name() {
    let spec = with_name("longName")
        .with_short_name("shortName")
        .build()
        .expect("build spec");
    assert_eq!(spec.long_name(), "longName");
    assert_eq!(spec.short_name(), Some("shortName"));
    assert_eq!(spec.arg_name(), "LONGNAME");
    assert!(spec.matches("shortName"));
    assert!(spec.matches("longName"));
}

#[test]
fn build_required_option_with_single_arg() {
    let spec = with_name("longName")
        .with_description("description")
        .required()
        .require_arg()
        .build()
        .expect("build spec");
    assert!(spec.is_required());
    assert_eq!(spec.description(), Some("description"));
    assert_eq!(spec.arity(), Arity::One);
    assert!(spec.takes_value());
    assert!(!spec.has_multiple_args());
}

#[test]
fn build_option_with_unlimited_args() {
    let spec = with_name("longName")
        .allow_multiple_args()
        .build()
        .expect("build spec");
    assert_eq!(spec.arity(), Arity::Unlimited);
    assert!(spec.has_multiple_args());
    assert!(!spec.has_optional_arg());
}

#[test]
fn build_option_with_optional_arg() {
    let spec = with_name("longName")
        .with_arg_name("NAME")
        .with_value_separator(':')
        .allow_optional_arg()
        .build()
        .expect("build spec");
    assert!(spec.has_optional_arg());
    assert_eq!(spec.arity(), Arity::One);
    assert_eq!(spec.arg_name(), "NAME");
    assert_eq!(spec.value_separator(), Some(':'));
}

#[test]
fn build_option_with_optional_args() {
    let spec = with_name("longName")
        .allow_optional_args()
        .build()
        .expect("build spec");
    assert!(spec.has_optional_arg());
    assert_eq!(spec.arity(), Arity::Unlimited);
}

#[rstest]
#[case(0, Arity::None)]
#[case(1, Arity::One)]
#[case(3, Arity::Fixed(3))]
fn counted_args_map_onto_arity(#[case] count: usize, #[case] expected: Arity) {
    let fixed = with_name("files")
        .allow_multiple_args_up_to(count)
        .build()
        .expect("build spec");
    assert_eq!(fixed.arity(), expected);
    assert!(!fixed.has_optional_arg());

    let optional = with_name("files")
        .allow_optional_args_up_to(count)
        .build()
        .expect("build spec");
    assert_eq!(optional.arity(), expected);
    assert!(optional.has_optional_arg());
}

#[rstest]
#[case(true, Arity::One)]
#[case(false, Arity::None)]
fn require_arg_if_toggles_single_value(#[case] takes_arg: bool, #[case] expected: Arity) {
    let spec = with_name("domain")
        .allow_multiple_args()
        .require_arg_if(takes_arg)
        .build()
        .expect("build spec");
    assert_eq!(spec.arity(), expected);
}

#[test]
fn required_if_false_clears_required_flag() {
    let spec = with_name("domain")
        .required()
        .required_if(false)
        .build()
        .expect("build spec");
    assert!(!spec.is_required());
}

#[test]
fn type_tag_is_carried_through() {
    let spec = with_name("port")
        .with_type(TypeTag::of::<u16>())
        .build()
        .expect("build spec");
    let tag = spec.type_tag().expect("type tag set");
    assert!(tag.is::<u16>());
    assert!(!tag.is::<String>());
}

#[rstest]
#[case::empty("")]
#[case::leading_dash("-region")]
#[case::whitespace("my region")]
#[case::equals("region=eu")]
fn rejects_unusable_long_names(#[case] name: &str) {
    let err = with_name(name).build().expect_err("invalid name must fail");
    assert!(
        matches!(err, BuildError::InvalidName { name: ref rejected, .. } if rejected == name),
        "unexpected error {err:?}"
    );
}

#[test]
fn rejects_unusable_short_names() {
    let err = with_name("region")
        .with_short_name("")
        .build()
        .expect_err("empty short name must fail");
    assert!(matches!(err, BuildError::InvalidName { .. }));
}

#[test]
fn building_twice_does_not_disturb_earlier_spec() {
    let builder = with_name("domain").require_arg();
    let first = builder.build().expect("first build");
    let second = builder
        .with_description("changed")
        .build()
        .expect("second build");
    assert_eq!(first.description(), None);
    assert_eq!(second.description(), Some("changed"));
}

#[test]
fn try_from_delegates_to_build() {
    let spec = OptionSpec::try_from(with_name("domain")).expect("convert builder");
    assert_eq!(spec.long_name(), "domain");
    assert!(OptionSpec::try_from(OptionSpec::builder()).is_err());
}
