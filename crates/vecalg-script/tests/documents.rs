use std::{env, fs, process};

use vecalg::{vec2, Vec2f, Vec3d};
use vecalg_script::{ScriptState, Value};

#[test]
fn load_from_file() {
    vecalg_script::init_logger!();

    let path = env::temp_dir().join(format!("vecalg-script-{}.toml", process::id()));
    fs::write(
        &path,
        "position = [1.0, 2.0, 2.0]\n[display]\nsize = [640, 480]\n",
    )
    .unwrap();

    let mut state = ScriptState::load(&path).unwrap();
    fs::remove_file(&path).unwrap();

    state.push_value("position").unwrap();
    let position: Vec3d = state.read().unwrap();
    assert_eq!(position.length(), 3.0);
    state.pop().unwrap();

    state.push_table("display").unwrap();
    state.push_value("size").unwrap();
    assert_eq!(state.read::<Vec2f>().unwrap(), [640.0, 480.0]);

    state.reset();
    state.set("scale", vec2(0.5, 0.25)).unwrap();
    state.push_value("scale").unwrap();
    assert_eq!(
        state.read::<Value>().unwrap(),
        Value::List(vec![Value::Number(0.5), Value::Number(0.25)])
    );
}

#[test]
fn missing_file() {
    let err = ScriptState::load("does/not/exist.toml").unwrap_err();
    assert!(format!("{err:#}").contains("exist.toml"), "{err:#}");
}
