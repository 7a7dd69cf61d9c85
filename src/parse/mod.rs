//! Position scanner for INSERT statements.
//!
//! This is not a SQL parser: it understands just enough of
//! `INSERT INTO <table> [(col, ...)]` to recover the target table and the
//! exact lexical span of every explicitly listed column, and classifies
//! everything else as unsupported. The statement tail (VALUES, SELECT,
//! whatever follows) is never inspected; the splicer patches around it.

use nom::{
    IResult, Offset,
    bytes::complete::{tag_no_case, take_while1},
    character::complete::{multispace0, multispace1},
};

use crate::error::{Result, RewriteError};
use crate::statement::{ColumnSegment, InsertStatementContext, StatementContext};

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn ident(input: &str) -> IResult<&str, &str> {
    take_while1(is_ident_char)(input)
}

/// Matches `INSERT INTO <table>` and yields the table name.
fn insert_into(input: &str) -> IResult<&str, &str> {
    let (input, _) = multispace0(input)?;
    let (input, _) = tag_no_case("insert")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, _) = tag_no_case("into")(input)?;
    let (input, _) = multispace1(input)?;
    ident(input)
}

fn skip_ws(input: &str) -> &str {
    input.trim_start()
}

/// Scan one statement far enough to drive the rewrite core.
pub fn scan(sql: &str) -> Result<StatementContext> {
    let Ok((rest, table)) = insert_into(sql) else {
        return Ok(StatementContext::Unsupported);
    };
    let rest = skip_ws(rest);
    if !rest.starts_with('(') {
        return Ok(StatementContext::Insert(
            InsertStatementContext::with_default_columns(table),
        ));
    }
    let columns = column_segments(sql, &rest[1..])?;
    Ok(StatementContext::Insert(InsertStatementContext::new(
        table, columns,
    )))
}

/// Collects the column list between the parentheses, recording each name's
/// inclusive span relative to the start of the statement.
fn column_segments(base: &str, mut input: &str) -> Result<Vec<ColumnSegment>> {
    let mut segments = Vec::new();
    loop {
        input = skip_ws(input);
        let (rest, name) = ident(input)
            .map_err(|_| RewriteError::Parse("expected column name in column list".to_string()))?;
        let start = base.offset(input);
        let stop = base.offset(rest) - 1;
        segments.push(ColumnSegment::new(name, start, stop));

        input = skip_ws(rest);
        match input.chars().next() {
            Some(',') => input = &input[1..],
            Some(')') => return Ok(segments),
            _ => return Err(RewriteError::Parse("unterminated column list".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scans_explicit_column_list_with_spans() {
        //         0         1         2         3
        //         0123456789012345678901234567890123
        let sql = "INSERT INTO t_user (user_id, pwd) VALUES (1, 'x')";
        let StatementContext::Insert(insert) = scan(sql).unwrap() else {
            panic!("expected insert context");
        };

        assert_eq!(insert.table(), "t_user");
        assert!(insert.uses_explicit_columns());
        assert_eq!(
            insert.columns(),
            &[
                ColumnSegment::new("user_id", 20, 26),
                ColumnSegment::new("pwd", 29, 31),
            ]
        );
    }

    #[test]
    fn scans_lowercase_and_tight_spacing() {
        let sql = "insert into t_user(pwd)values('x')";
        let StatementContext::Insert(insert) = scan(sql).unwrap() else {
            panic!("expected insert context");
        };

        assert_eq!(insert.columns(), &[ColumnSegment::new("pwd", 19, 21)]);
    }

    #[test]
    fn insert_without_column_list_uses_default_columns() {
        let StatementContext::Insert(insert) =
            scan("INSERT INTO t_user VALUES (1, 'x')").unwrap()
        else {
            panic!("expected insert context");
        };

        assert_eq!(insert.table(), "t_user");
        assert!(!insert.uses_explicit_columns());
        assert!(insert.columns().is_empty());
    }

    #[test]
    fn non_insert_statements_are_unsupported() {
        assert!(matches!(
            scan("SELECT * FROM t_user").unwrap(),
            StatementContext::Unsupported
        ));
        assert!(matches!(
            scan("UPDATE t_user SET pwd = 'x'").unwrap(),
            StatementContext::Unsupported
        ));
    }

    #[test]
    fn unterminated_column_list_fails() {
        assert!(matches!(
            scan("INSERT INTO t_user (user_id, pwd"),
            Err(RewriteError::Parse(_))
        ));
    }

    #[test]
    fn empty_column_list_fails() {
        assert!(matches!(
            scan("INSERT INTO t_user () VALUES ()"),
            Err(RewriteError::Parse(_))
        ));
    }
}
