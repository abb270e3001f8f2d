//! Prints every top-level vector of a configuration document.

use std::env;

use anyhow::bail;
use itertools::Itertools;
use vecalg::{Vec2d, Vec3d, Vec4d};
use vecalg_script::ScriptState;

fn main() -> anyhow::Result<()> {
    vecalg_script::init_logger!();

    let Some(path) = env::args_os().nth(1) else {
        bail!("usage: vecalg-script <file.toml>");
    };

    let mut state = ScriptState::load(&path)?;
    let keys = state.keys()?;
    log::debug!("entries: {}", keys.iter().join(", "));

    for key in keys {
        state.push_value(&key)?;
        let len = state.top().and_then(|value| value.numeric_len());
        let printed = match len {
            Some(2) => state.read::<Vec2d>().map(|v| Some((v.to_string(), v.length())))?,
            Some(3) => state.read::<Vec3d>().map(|v| Some((v.to_string(), v.length())))?,
            Some(4) => state.read::<Vec4d>().map(|v| Some((v.to_string(), v.length())))?,
            _ => None,
        };
        state.pop()?;

        match printed {
            Some((vector, length)) => println!("{key} = {vector} (length {length:.3})"),
            None => log::trace!("skipping '{key}', not a vector"),
        }
    }

    Ok(())
}
