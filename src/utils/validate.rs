use std::collections::HashMap;
use std::fmt;

use regex::Regex;

use crate::core::error::{ConfigError, Error};

const FALLBACK_MESSAGE: &str = "{0} is invalid";

/// A single validation rule reference: a registered tag plus an optional
/// parameter, e.g. `min=3` or `startswith=+62`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Rule {
    pub(crate) tag: &'static str,
    pub(crate) param: &'static str,
}

impl Rule {
    pub(crate) const fn new(tag: &'static str) -> Self {
        Self { tag, param: "" }
    }

    pub(crate) const fn with_param(tag: &'static str, param: &'static str) -> Self {
        Self { tag, param }
    }
}

/// One field of a payload under validation. `name` is the wire name used in
/// rendered messages, `value` is `None` when the field was absent from the
/// request body.
#[derive(Debug)]
pub(crate) struct Field<'a> {
    pub(crate) name: &'static str,
    pub(crate) value: Option<&'a str>,
    pub(crate) rules: &'static [Rule],
}

impl<'a> Field<'a> {
    pub(crate) fn new(
        name: &'static str,
        value: Option<&'a str>,
        rules: &'static [Rule],
    ) -> Self {
        Self { name, value, rules }
    }
}

/// Implemented by request payloads to declare their validation schema.
/// Field order determines message order.
pub(crate) trait Validate {
    fn fields(&self) -> Vec<Field<'_>>;

    /// Whole-payload checks, run only when every field rule passed.
    fn cross_field_checks(&self) -> Vec<String> {
        Vec::new()
    }
}

pub(crate) struct RuleContext<'a> {
    pub(crate) value: Option<&'a str>,
    pub(crate) param: &'a str,
    pub(crate) peers: &'a [Field<'a>],
}

type RuleFn = Box<dyn Fn(&RuleContext) -> bool + Send + Sync>;

/// Registry of validation rules and their message templates. Built once at
/// startup and read-only afterwards; templates use `{0}` for the field name
/// and `{1}` for the rule parameter.
pub(crate) struct Validator {
    rules: HashMap<&'static str, RuleFn>,
    messages: HashMap<&'static str, String>,
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tags: Vec<_> = self.rules.keys().collect();
        tags.sort_unstable();

        f.debug_struct("Validator").field("rules", &tags).finish()
    }
}

impl Validator {
    pub(crate) fn new() -> Result<Self, ConfigError> {
        let phone_pattern = Regex::new(r"^\+[1-9]?[0-9]{7,14}$")?;

        let mut validator = Self {
            rules: HashMap::new(),
            messages: HashMap::new(),
        };

        validator.register_rule("required", |ctx| has_value(ctx.value));
        validator.register_rule("min", min_length);
        validator.register_rule("max", max_length);
        validator.register_rule("startswith", starts_with);
        validator.register_rule("e164", move |ctx| {
            ctx.value.is_none_or(|value| phone_pattern.is_match(value))
        });
        validator.register_rule("required_without_all", required_without_all);

        validator.register_message("required", "{0} is a required field");
        validator.register_message("min", "{0} must be at least {1} characters in length");
        validator.register_message("max", "{0} must be a maximum of {1} characters in length");
        validator.register_message("e164", "{0} must be a valid E.164 formatted phone number");

        Ok(validator)
    }

    pub(crate) fn register_rule<F>(&mut self, tag: &'static str, rule: F)
    where
        F: Fn(&RuleContext) -> bool + Send + Sync + 'static,
    {
        self.rules.insert(tag, Box::new(rule));
    }

    pub(crate) fn register_message(&mut self, tag: &'static str, template: &str) {
        self.messages.insert(tag, template.to_string());
    }

    /// Walks the payload's schema and returns one rendered message per
    /// failing rule, fields in schema order, rules in declaration order.
    /// An empty vec means the payload is valid. A schema referencing a tag
    /// that was never registered is a programmer error, not a validation
    /// failure.
    pub(crate) fn validate<T: Validate>(&self, payload: &T) -> Result<Vec<String>, Error> {
        let fields = payload.fields();
        let mut messages = Vec::new();

        for field in &fields {
            for rule in field.rules {
                let check = self
                    .rules
                    .get(rule.tag)
                    .ok_or_else(|| Error::UnknownRule(rule.tag.to_string()))?;

                let ctx = RuleContext {
                    value: field.value,
                    param: rule.param,
                    peers: &fields,
                };

                if !check(&ctx) {
                    messages.push(self.render(rule.tag, field.name, rule.param));
                }
            }
        }

        if messages.is_empty() {
            messages = payload.cross_field_checks();
        }

        Ok(messages)
    }

    fn render(&self, tag: &str, field: &str, param: &str) -> String {
        self.messages
            .get(tag)
            .map(String::as_str)
            .unwrap_or(FALLBACK_MESSAGE)
            .replace("{0}", field)
            .replace("{1}", param)
    }
}

fn has_value(value: Option<&str>) -> bool {
    value.is_some_and(|value| !value.is_empty())
}

fn min_length(ctx: &RuleContext) -> bool {
    let Some(value) = ctx.value else {
        return true;
    };

    ctx.param
        .parse::<usize>()
        .is_ok_and(|min| value.chars().count() >= min)
}

fn max_length(ctx: &RuleContext) -> bool {
    let Some(value) = ctx.value else {
        return true;
    };

    ctx.param
        .parse::<usize>()
        .is_ok_and(|max| value.chars().count() <= max)
}

fn starts_with(ctx: &RuleContext) -> bool {
    let Some(value) = ctx.value else {
        return true;
    };

    value.starts_with(ctx.param)
}

/// Passes when the field has a value, or when any of the space-separated
/// peer fields named in the parameter is present.
fn required_without_all(ctx: &RuleContext) -> bool {
    if has_value(ctx.value) {
        return true;
    }

    ctx.param.split_whitespace().any(|name| {
        ctx.peers
            .iter()
            .any(|peer| peer.name == name && peer.value.is_some())
    })
}
