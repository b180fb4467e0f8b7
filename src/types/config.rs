use std::fs;

use crate::types::CostModel;

/// runtime configuration for the levdist cli, defined as a global `levdist` table in a lua file:
///
/// ```lua
/// levdist = {
///     costs = {
///         add = 1.0,
///         remove = 1.0,
///         change = 1.5,
///     },
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// cost weights the calculator is constructed with, [CostModel::default] if omitted
    pub costs: Option<CostModel>,
}

impl mlua::FromLua for Config {
    fn from_lua(value: mlua::Value, lua: &mlua::Lua) -> mlua::Result<Self> {
        let table = match value {
            mlua::Value::Table(table) => table,
            _ => {
                return Err(mlua::Error::FromLuaConversionError {
                    from: "value",
                    to: "levdist::config::Config".into(),
                    message: Some("levdist must be a table".into()),
                });
            }
        };

        let costs = match table.get::<mlua::Value>("costs")? {
            mlua::Value::Nil => None,
            value => Some(lua.unpack(value)?),
        };

        Ok(Config { costs })
    }
}

impl mlua::FromLua for CostModel {
    fn from_lua(value: mlua::Value, _: &mlua::Lua) -> mlua::Result<Self> {
        let table = match value {
            mlua::Value::Table(table) => table,
            _ => {
                return Err(mlua::Error::FromLuaConversionError {
                    from: "value",
                    to: "levdist::types::CostModel".into(),
                    message: Some("costs must be a table".into()),
                });
            }
        };

        let defaults = CostModel::default();
        CostModel::new(
            table.get::<Option<f64>>("add")?.unwrap_or(defaults.add),
            table.get::<Option<f64>>("remove")?.unwrap_or(defaults.remove),
            table.get::<Option<f64>>("change")?.unwrap_or(defaults.change),
        )
        .map_err(|err| mlua::Error::FromLuaConversionError {
            from: "table",
            to: "levdist::types::CostModel".into(),
            message: Some(err.to_string()),
        })
    }
}

pub fn configuration(lua: &mlua::Lua, file_name: &str) -> Result<Config, String> {
    let conf_str = fs::read_to_string(file_name).map_err(|err| {
        format!(
            "Issue trying to read configuration from '{}': [{}], falling back to default configuration",
            file_name, err
        )
    })?;
    parse(lua, file_name, &conf_str)
}

/// load [source] into [lua] and unpack the global levdist table into a [Config]
pub fn parse(lua: &mlua::Lua, file_name: &str, source: &str) -> Result<Config, String> {
    lua.load(source)
        .set_name(file_name)
        .exec()
        .map_err(|err| format!("{}: {}", file_name, err))?;
    let raw_conf = lua
        .globals()
        .get::<mlua::Value>("levdist")
        .map_err(|err| format!("{}: {}", file_name, err))?;
    if raw_conf.is_nil() {
        return Err(format!(
            "{}: levdist table is missing from configuration",
            file_name
        ));
    }
    let conf: Config = lua
        .unpack(raw_conf)
        .map_err(|err| format!("{}: {}", file_name, err))?;
    Ok(conf)
}

#[cfg(test)]
mod tests {
    use super::parse;

    #[test]
    fn full_costs_table() {
        let lua = mlua::Lua::new();
        let conf = parse(
            &lua,
            "config_tests",
            "levdist = { costs = { add = 2, remove = 0.5, change = 1.25 } }",
        )
        .unwrap();
        let costs = conf.costs.unwrap();
        assert_eq!(costs.add, 2.0);
        assert_eq!(costs.remove, 0.5);
        assert_eq!(costs.change, 1.25);
    }

    #[test]
    fn omitted_costs_stay_unset() {
        let lua = mlua::Lua::new();
        let conf = parse(&lua, "config_tests", "levdist = {}").unwrap();
        assert!(conf.costs.is_none());
    }

    #[test]
    fn partial_costs_fall_back_per_field() {
        let lua = mlua::Lua::new();
        let conf = parse(&lua, "config_tests", "levdist = { costs = { change = 4 } }").unwrap();
        let costs = conf.costs.unwrap();
        assert_eq!(costs.add, 1.0);
        assert_eq!(costs.remove, 1.0);
        assert_eq!(costs.change, 4.0);
    }

    #[test]
    fn missing_levdist_table() {
        let lua = mlua::Lua::new();
        assert!(parse(&lua, "config_tests", "x = 1").is_err());
    }

    #[test]
    fn negative_cost_is_rejected() {
        let lua = mlua::Lua::new();
        assert!(parse(&lua, "config_tests", "levdist = { costs = { add = -1 } }").is_err());
    }
}
