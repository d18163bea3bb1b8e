//! Helpers for building the binaries' arguments with clap's builder API.

use clap::{
    CommandFactory, FromArgMatches,
    builder::{PossibleValue, PossibleValuesParser, TypedValueParser},
    error::ErrorKind,
};

/// A fixed list of names and the values they stand for, usable as a clap value parser.
#[derive(Clone, Debug)]
pub struct StaticMap<T>(pub &'static [(&'static str, T)])
where
    T: 'static;

impl<T> StaticMap<T> {
    /// All the names in the order given.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> {
        self.0.iter().map(|(k, _)| *k)
    }

    /// Value of the first entry named `key`.
    pub fn get(&self, key: &str) -> Option<&'static T> {
        self.0.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    /// Like [`Self::get`] but ASCII casing is ignored.
    pub fn get_ignore_case(&self, key: &str) -> Option<&'static T> {
        self.0
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v)
    }
}

impl<T> TypedValueParser for StaticMap<T>
where
    T: Sync + Send + Clone + 'static,
{
    type Value = T;

    fn parse_ref(
        &self,
        cmd: &clap::Command,
        arg: Option<&clap::Arg>,
        value: &std::ffi::OsStr,
    ) -> Result<Self::Value, clap::Error> {
        // reports unknown names with the list of possible ones
        let key = PossibleValuesParser::new(self.keys()).parse_ref(cmd, arg, value)?;
        let found = if arg.is_some_and(|i| i.is_ignore_case_set()) {
            self.get_ignore_case(&key)
        } else {
            self.get(&key)
        };
        found
            .cloned()
            .ok_or_else(|| cmd.clone().error(ErrorKind::InvalidValue, "unknown value"))
    }

    fn possible_values(&self) -> Option<Box<dyn Iterator<Item = PossibleValue> + '_>> {
        Some(Box::new(self.keys().map(PossibleValue::new)))
    }
}

/// Extension helper functions for [`CommandFactory`].
pub trait CommandFactoryExt: CommandFactory {
    /// A clap styled error for this command.
    fn error(kind: ErrorKind, message: impl std::fmt::Display) -> clap::Error {
        Self::command().error(kind, message)
    }
}

impl<T> CommandFactoryExt for T where T: CommandFactory {}

/// Stands in for `Parser::parse` of the derive API.
pub trait Parse: CommandFactory + FromArgMatches {
    fn parse() -> Self {
        match Self::from_arg_matches(&Self::command().get_matches()) {
            Ok(v) => v,
            Err(e) => e.exit(),
        }
    }
}

impl<T> Parse for T where T: CommandFactory + FromArgMatches {}
