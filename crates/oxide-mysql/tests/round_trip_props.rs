//! Property tests: restored SQL parses back to the same tree and restores
//! to the same text.

use oxide_mysql::{restore, Parser, RestoreFlags};
use proptest::prelude::*;

const COLUMNS: &[&str] = &["a", "b", "c1", "price", "t.a", "db.t.b"];
const TABLES: &[&str] = &["t", "db.t", "orders"];
const BINARY_OPS: &[&str] = &[
    "+", "-", "*", "/", "DIV", "%", "=", "<>", "<", ">=", "<=>", "AND", "OR", "XOR", "&", "|",
    "<<", "LIKE",
];
const FUNCTIONS: &[&str] = &["abs", "concat", "coalesce", "ifnull", "greatest"];

fn leaf() -> impl Strategy<Value = String> {
    prop_oneof![
        any::<u64>().prop_map(|n| n.to_string()),
        (0u32..100_000, 0u32..1000).prop_map(|(i, f)| format!("{i}.{f}")),
        "[a-z0-9 ]{0,8}".prop_map(|s| format!("'{s}'")),
        prop::sample::select(COLUMNS).prop_map(str::to_string),
        Just("NULL".to_string()),
        Just("TRUE".to_string()),
        Just("?".to_string()),
        Just("@v".to_string()),
    ]
}

/// Every composite form is parenthesized, so operator precedence never
/// decides the shape of the generated tree.
fn expr() -> impl Strategy<Value = String> {
    leaf().prop_recursive(4, 32, 3, |inner| {
        prop_oneof![
            (inner.clone(), prop::sample::select(BINARY_OPS), inner.clone())
                .prop_map(|(l, op, r)| format!("({l} {op} {r})")),
            inner.clone().prop_map(|e| format!("(NOT ({e}))")),
            inner.clone().prop_map(|e| format!("(-({e}))")),
            inner.clone().prop_map(|e| format!("(({e}) IS NOT NULL)")),
            (inner.clone(), inner.clone(), inner.clone())
                .prop_map(|(e, lo, hi)| format!("({e} BETWEEN {lo} AND {hi})")),
            (inner.clone(), prop::collection::vec(inner.clone(), 1..4))
                .prop_map(|(e, list)| format!("({e} IN ({}))", list.join(", "))),
            (prop::sample::select(FUNCTIONS), prop::collection::vec(inner.clone(), 1..4))
                .prop_map(|(f, args)| format!("{f}({})", args.join(", "))),
            (inner.clone(), inner.clone(), inner)
                .prop_map(|(c, t, e)| format!("(CASE WHEN {c} THEN {t} ELSE {e} END)")),
        ]
    })
}

fn statement() -> impl Strategy<Value = String> {
    let table = prop::sample::select(TABLES);
    prop_oneof![
        (prop::collection::vec(expr(), 1..4), table.clone(), expr(), 0u32..100).prop_map(
            |(fields, t, cond, limit)| {
                format!(
                    "SELECT {} FROM {t} WHERE {cond} ORDER BY 1 LIMIT {limit}",
                    fields.join(", ")
                )
            }
        ),
        (table.clone(), expr(), expr())
            .prop_map(|(t, a, b)| format!("INSERT INTO {t} (a, b) VALUES ({a}, {b})")),
        (table.clone(), expr(), expr())
            .prop_map(|(t, v, cond)| format!("UPDATE {t} SET a = {v} WHERE {cond}")),
        (table, expr()).prop_map(|(t, cond)| format!("DELETE FROM {t} WHERE {cond}")),
    ]
}

fn check_stable(parser: &Parser, sql: &str) -> Result<(), TestCaseError> {
    let stmt = parser
        .parse_one_stmt(sql, "", "")
        .map_err(|e| TestCaseError::fail(format!("{sql}: {e}")))?
        .stmt;
    let restored =
        restore(&stmt, RestoreFlags::DEFAULT).map_err(|e| TestCaseError::fail(e.to_string()))?;
    let again = parser
        .parse_one_stmt(&restored, "", "")
        .map_err(|e| TestCaseError::fail(format!("{restored}: {e}")))?
        .stmt;
    prop_assert_eq!(&again, &stmt, "restored: {}", restored);
    let restored_again =
        restore(&again, RestoreFlags::DEFAULT).map_err(|e| TestCaseError::fail(e.to_string()))?;
    prop_assert_eq!(restored_again, restored);
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn expressions_round_trip(e in expr()) {
        check_stable(&Parser::new(), &format!("SELECT {e}"))?;
    }

    #[test]
    fn statements_round_trip(sql in statement()) {
        check_stable(&Parser::new(), &sql)?;
    }

    #[test]
    fn restore_never_panics_on_parsed_input(sql in statement(), semicolons in 0usize..3) {
        let input = format!("{sql}{}", ";".repeat(semicolons));
        let (stmts, _) = Parser::new()
            .parse(&input, "", "")
            .map_err(|e| TestCaseError::fail(format!("{input}: {e}")))?;
        prop_assert_eq!(stmts.len(), 1);
        prop_assert!(!stmts[0].stmt.to_string().is_empty());
    }
}
