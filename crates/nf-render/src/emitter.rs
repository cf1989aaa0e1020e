//! luatest emitter built on minijinja templates

use crate::error::RenderResult;
use crate::expectation::{CaseOutcome, Expectation};
use crate::lua::{
    lua_kind, lua_literal, lua_long_string, lua_nullability, lua_sample, lua_string, NIL,
};
use minijinja::Environment;
use nf_core::{Combination, GeneratorConfig, TypeDescriptor};
use serde::Serialize;

const HEADER_TEMPLATE: &str = "header.lua";
const CASE_TEMPLATE: &str = "case.lua";

/// Settings that end up in the generated text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitterSettings {
    /// luatest group name
    pub group: String,
    /// Issue referenced by divergent cases
    pub known_divergence_issue: String,
    /// Issue referenced for kinds not covered yet
    pub more_types_issue: String,
}

impl From<&GeneratorConfig> for EmitterSettings {
    fn from(config: &GeneratorConfig) -> Self {
        Self {
            group: config.group.clone(),
            known_divergence_issue: config.known_divergence_issue.clone(),
            more_types_issue: config.more_types_issue.clone(),
        }
    }
}

impl Default for EmitterSettings {
    fn default() -> Self {
        Self::from(&GeneratorConfig::default())
    }
}

/// Everything needed to render one test case
#[derive(Debug, Clone, Copy)]
pub struct CaseInput<'a> {
    /// Case name without the `test_` prefix
    pub name: &'a str,
    pub combination: &'a Combination,
    /// SDL sent to the oracle
    pub schema: &'a str,
    /// Query sent to the oracle
    pub query: &'a str,
    pub expectation: &'a Expectation,
}

#[derive(Serialize)]
struct CatalogEntryContext {
    kind: String,
    lua_type: &'static str,
    var_type: String,
    value: String,
    default: String,
}

#[derive(Serialize)]
struct HeaderContext<'a> {
    group: &'a str,
    declarations: Vec<&'static str>,
    types: Vec<CatalogEntryContext>,
    more_types_issue: &'a str,
}

#[derive(Serialize)]
struct CaseContext<'a> {
    name: &'a str,
    argument_type: String,
    argument_nullability: String,
    argument_inner_type: String,
    argument_inner_nullability: String,
    argument_value: String,
    variable_type: String,
    variable_nullability: String,
    variable_inner_type: String,
    variable_inner_nullability: String,
    variable_default: String,
    variable_value: String,
    reference_schema: String,
    query: String,
    expected_data: String,
    expected_error: String,
    divergent: bool,
    known_divergence_issue: &'a str,
}

/// Renders the generated luatest file piece by piece
pub struct LuaEmitter {
    env: Environment<'static>,
    settings: EmitterSettings,
}

impl std::fmt::Debug for LuaEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LuaEmitter")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl LuaEmitter {
    /// Create an emitter with the bundled templates
    pub fn new(settings: EmitterSettings) -> RenderResult<Self> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.add_template(HEADER_TEMPLATE, include_str!("../templates/header.lua.j2"))?;
        env.add_template(CASE_TEMPLATE, include_str!("../templates/case.lua.j2"))?;

        Ok(Self { env, settings })
    }

    pub fn settings(&self) -> &EmitterSettings {
        &self.settings
    }

    /// Render the file preamble, declaring every kind of `catalog` on the Lua side
    pub fn render_header(&self, catalog: &'static [TypeDescriptor]) -> RenderResult<String> {
        let context = HeaderContext {
            group: &self.settings.group,
            declarations: catalog.iter().filter_map(|d| d.lua_declaration).collect(),
            types: catalog
                .iter()
                .map(|d| CatalogEntryContext {
                    kind: lua_string(d.kind),
                    lua_type: d.lua_type,
                    var_type: lua_string(d.wire_type),
                    value: lua_sample(&d.value),
                    default: lua_sample(&d.default),
                })
                .collect(),
            more_types_issue: &self.settings.more_types_issue,
        };

        log::debug!("Rendering header for {} kinds", catalog.len());
        let template = self.env.get_template(HEADER_TEMPLATE)?;
        Ok(template.render(context)?)
    }

    /// Render one test function
    pub fn render_case(&self, input: &CaseInput<'_>) -> RenderResult<String> {
        let combination = input.combination;
        let argument = &combination.argument;
        let variable = combination.variable.as_ref();
        let expectation = input.expectation;

        let context = CaseContext {
            name: input.name,
            argument_type: lua_string(argument.kind_name()),
            argument_nullability: lua_nullability(Some(argument.nullability())),
            argument_inner_type: lua_kind(argument.inner_kind().map(|d| d.kind)),
            argument_inner_nullability: lua_nullability(argument.inner_nullability()),
            argument_value: lua_literal(&combination.argument_value),
            variable_type: lua_kind(variable.map(|v| v.ty.kind_name())),
            variable_nullability: lua_nullability(variable.map(|v| v.ty.nullability())),
            variable_inner_type: lua_kind(
                variable.and_then(|v| v.ty.inner_kind()).map(|d| d.kind),
            ),
            variable_inner_nullability: lua_nullability(
                variable.and_then(|v| v.ty.inner_nullability()),
            ),
            variable_default: variable.map_or_else(|| NIL.to_string(), |v| lua_literal(&v.default)),
            variable_value: variable.map_or_else(|| NIL.to_string(), |v| lua_literal(&v.value)),
            reference_schema: lua_long_string(input.schema),
            query: lua_string(input.query),
            expected_data: expectation
                .data
                .as_deref()
                .map_or_else(|| NIL.to_string(), lua_string),
            expected_error: expectation
                .error
                .as_deref()
                .map_or_else(|| NIL.to_string(), lua_string),
            divergent: expectation.outcome() == CaseOutcome::Divergent,
            known_divergence_issue: &self.settings.known_divergence_issue,
        };

        let template = self.env.get_template(CASE_TEMPLATE)?;
        Ok(template.render(context)?)
    }
}

#[cfg(test)]
#[path = "emitter_test.rs"]
mod tests;
