//! Game documents shared by the unit tests.
use crate::Utility;
use serde_json::Map;
use serde_json::Value;
use serde_json::json;

/// build a game document from the two payoff matrices.
/// `a[i][j]` and `b[i][j]` are the utilities of the row and column
/// player when the row player takes action `i` and the column player
/// takes action `j`.
pub fn document(
    row: (&str, &[&str]),
    col: (&str, &[&str]),
    a: &[&[Utility]],
    b: &[&[Utility]],
) -> Value {
    let (p1, rows) = row;
    let (p2, cols) = col;
    let u1 = rows
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let cells = cols
                .iter()
                .enumerate()
                .map(|(j, c)| (c.to_string(), cell(r, c, a[i][j])))
                .collect::<Map<String, Value>>();
            (r.to_string(), Value::Object(cells))
        })
        .collect::<Map<String, Value>>();
    let u2 = cols
        .iter()
        .enumerate()
        .map(|(j, c)| {
            let cells = rows
                .iter()
                .enumerate()
                .map(|(i, r)| (r.to_string(), cell(c, r, b[i][j])))
                .collect::<Map<String, Value>>();
            (c.to_string(), Value::Object(cells))
        })
        .collect::<Map<String, Value>>();
    json!([
        {"name": p1, "actions": rows, "utilities": u1},
        {"name": p2, "actions": cols, "utilities": u2},
    ])
}

fn cell(action: &str, response: &str, utility: Utility) -> Value {
    json!({"outcome": format!("{} against {}", action, response), "utility": utility})
}

/// Defect strictly dominates Cooperate for both players.
pub fn prisoners_dilemma() -> Value {
    document(
        ("P1", &["Cooperate", "Defect"]),
        ("P2", &["Cooperate", "Defect"]),
        &[&[3., 0.], &[5., 1.]],
        &[&[3., 5.], &[0., 1.]],
    )
}

/// both players get 1 when their actions match and 0 otherwise.
/// utilities are written as JSON integers.
pub fn coordination() -> Value {
    json!([
        {
            "name": "P1",
            "actions": ["A", "B"],
            "utilities": {
                "A": {"A": {"outcome": "meet", "utility": 1}, "B": {"outcome": "miss", "utility": 0}},
                "B": {"A": {"outcome": "miss", "utility": 0}, "B": {"outcome": "meet", "utility": 1}}
            }
        },
        {
            "name": "P2",
            "actions": ["A", "B"],
            "utilities": {
                "A": {"A": {"outcome": "meet", "utility": 1}, "B": {"outcome": "miss", "utility": 0}},
                "B": {"A": {"outcome": "miss", "utility": 0}, "B": {"outcome": "meet", "utility": 1}}
            }
        }
    ])
}

/// zero-sum with no pure equilibrium.
pub fn matching_pennies() -> Value {
    document(
        ("Even", &["Heads", "Tails"]),
        ("Odd", &["Heads", "Tails"]),
        &[&[1., -1.], &[-1., 1.]],
        &[&[-1., 1.], &[1., -1.]],
    )
}

/// the row player's Stay dominates and the column player
/// does not care what it does: exactly two extreme equilibria.
pub fn indifferent() -> Value {
    document(
        ("Owl", &["Stay", "Leave"]),
        ("Mouse", &["Hide", "Freeze"]),
        &[&[1., 1.], &[0., 0.]],
        &[&[1., 1.], &[0., 0.]],
    )
}

/// hawk-dove with a mixed equilibrium at 0.5 and two pure ones.
pub fn hawk_dove() -> Value {
    document(
        ("Hawk", &["Fight", "Yield"]),
        ("Dove", &["Fight", "Yield"]),
        &[&[-1., 2.], &[0., 1.]],
        &[&[-1., 0.], &[2., 1.]],
    )
}

/// 3x3 with a unique fully mixed equilibrium.
pub fn rock_paper_scissors() -> Value {
    let moves: &[&str] = &["Rock", "Paper", "Scissors"];
    document(
        ("P1", moves),
        ("P2", moves),
        &[&[0., -1., 1.], &[1., 0., -1.], &[-1., 1., 0.]],
        &[&[0., 1., -1.], &[-1., 0., 1.], &[1., -1., 0.]],
    )
}
