use crate::model::Packing;
use crate::pipeline::best_index;
use serde_json::{Value, json};

/// Serialize a `Packing` as `{ strategy, capacity, bins, stats }`.
/// Each bin carries its creation index plus `occupied`/`remaining` so
/// consumers do not have to recompute them.
pub fn to_json(packing: &Packing) -> Value {
    let bins_val = packing
        .bins
        .iter()
        .enumerate()
        .map(|(id, bin)| {
            json!({
                "id": id,
                "items": bin.items(),
                "occupied": bin.occupied(),
                "remaining": bin.remaining_capacity(),
            })
        })
        .collect::<Vec<_>>();
    json!({
        "strategy": packing.strategy,
        "capacity": packing.capacity,
        "bins": bins_val,
        "stats": packing.stats(),
    })
}

/// Shape: `{ results: [to_json...], best: <strategy> }`, where `best` is the
/// packing with the fewest bins (null if `results` is empty).
pub fn comparison_to_json(results: &[Packing]) -> Value {
    let best = if results.is_empty() {
        Value::Null
    } else {
        json!(results[best_index(results)].strategy)
    };
    json!({
        "results": results.iter().map(to_json).collect::<Vec<_>>(),
        "best": best,
    })
}
