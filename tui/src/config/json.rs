use super::model::{OptimizerKind, ScheduleKind, SketchDraft};

/// Loads a [`SketchDraft`] from a JSON file.
///
/// # Errors
/// Returns a human-readable string if the file cannot be read or parsed.
pub fn load_sketch(path: &str) -> Result<SketchDraft, String> {
    let content =
        std::fs::read_to_string(path).map_err(|e| format!("cannot read '{path}': {e}"))?;

    parse_sketch(&content)
}

/// Parses a [`SketchDraft`], every missing field takes its default value.
///
/// # Errors
/// Returns a human-readable string if the content is not valid JSON or a field has an unknown
/// value.
pub fn parse_sketch(content: &str) -> Result<SketchDraft, String> {
    let val: serde_json::Value =
        serde_json::from_str(content).map_err(|e| format!("invalid JSON: {e}"))?;

    if !val.is_object() {
        return Err("config must be a JSON object".into());
    }

    let defaults = SketchDraft::default();

    let float = |key: &str, default: f32| -> Result<f32, String> {
        match &val[key] {
            serde_json::Value::Null => Ok(default),
            v => v
                .as_f64()
                .map(|f| f as f32)
                .ok_or_else(|| format!("{key} must be a number")),
        }
    };

    let integer = |key: &str| -> Result<Option<u64>, String> {
        match &val[key] {
            serde_json::Value::Null => Ok(None),
            v => v
                .as_u64()
                .map(Some)
                .ok_or_else(|| format!("{key} must be a non-negative integer")),
        }
    };

    let schedule = match string(&val, "schedule", "constant")? {
        "constant" => ScheduleKind::Constant,
        "decay" => ScheduleKind::Decay,
        other => return Err(format!("unknown schedule: {other}")),
    };

    let optimizer = match string(&val, "optimizer", "gradient_descent")? {
        "gradient_descent" => OptimizerKind::GradientDescent,
        "adam" => OptimizerKind::Adam,
        "gradient_descent_with_momentum" => OptimizerKind::GradientDescentWithMomentum,
        other => return Err(format!("unknown optimizer: {other}")),
    };

    Ok(SketchDraft {
        lr: float("lr", defaults.lr)?,
        schedule,
        decay_rate: float("decay_rate", defaults.decay_rate)?,
        optimizer,
        mu: float("mu", defaults.mu)?,
        b1: float("b1", defaults.b1)?,
        b2: float("b2", defaults.b2)?,
        eps: float("eps", defaults.eps)?,
        seed: integer("seed")?,
        fps: integer("fps")?.unwrap_or(defaults.fps),
    })
}

/// Reads a string field, `default` if it's missing or null.
fn string<'a>(val: &'a serde_json::Value, key: &str, default: &'a str) -> Result<&'a str, String> {
    match &val[key] {
        serde_json::Value::Null => Ok(default),
        v => v.as_str().ok_or_else(|| format!("{key} must be a string")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_default() {
        assert_eq!(parse_sketch("{}").unwrap(), SketchDraft::default());
    }

    #[test]
    fn full() {
        let draft = parse_sketch(
            r#"{
                "lr": 0.05,
                "schedule": "decay",
                "decay_rate": 0.01,
                "optimizer": "adam",
                "b1": 0.8,
                "seed": 42,
                "fps": 30
            }"#,
        )
        .unwrap();

        assert_eq!(draft.lr, 0.05);
        assert_eq!(draft.schedule, ScheduleKind::Decay);
        assert_eq!(draft.decay_rate, 0.01);
        assert_eq!(draft.optimizer, OptimizerKind::Adam);
        assert_eq!(draft.b1, 0.8);
        assert_eq!(draft.b2, 0.999);
        assert_eq!(draft.seed, Some(42));
        assert_eq!(draft.fps, 30);
    }

    #[test]
    fn unknown_values() {
        assert!(parse_sketch(r#"{"optimizer": "lbfgs"}"#).is_err());
        assert!(parse_sketch(r#"{"schedule": "cosine"}"#).is_err());
        assert!(parse_sketch(r#"{"lr": "fast"}"#).is_err());
    }

    #[test]
    fn wrong_types() {
        assert!(parse_sketch(r#"{"seed": "42"}"#).is_err());
        assert!(parse_sketch(r#"{"seed": -1}"#).is_err());
        assert!(parse_sketch(r#"{"fps": 30.5}"#).is_err());
        assert!(parse_sketch(r#"{"fps": 30.0}"#).is_err());
        assert!(parse_sketch(r#"{"schedule": 1}"#).is_err());
        assert!(parse_sketch(r#"{"optimizer": true}"#).is_err());
    }

    #[test]
    fn explicit_nulls_take_defaults() {
        let draft = parse_sketch(r#"{"seed": null, "fps": null, "optimizer": null}"#).unwrap();

        assert_eq!(draft, SketchDraft::default());
    }

    #[test]
    fn not_an_object() {
        assert!(parse_sketch("[1, 2]").is_err());
        assert!(parse_sketch("{").is_err());
    }
}
