// src/csv.rs
// Delimited-text output for the exported table. Text is built in memory,
// the caller decides where it goes.

/// Quote only when the field would otherwise split or break a line.
fn push_field(out: &mut String, field: &str, sep: char) {
    if field.contains([sep, '"', '\n', '\r']) {
        out.push('"');
        out.push_str(&field.replace('"', "\"\""));
        out.push('"');
    } else {
        out.push_str(field);
    }
}

/// Append one row, newline-terminated.
pub fn push_row(out: &mut String, row: &[String], sep: char) {
    for (i, cell) in row.iter().enumerate() {
        if i > 0 { out.push(sep); }
        push_field(out, cell, sep);
    }
    out.push('\n');
}

pub fn rows_to_string(rows: &[Vec<String>], sep: char) -> String {
    let mut out = s!();
    for r in rows {
        push_row(&mut out, r, sep);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strs(v: &[&str]) -> Vec<String> { v.iter().map(|s| s!(*s)).collect() }

    #[test]
    fn header_with_separator_is_quoted() {
        let mut out = s!();
        push_row(&mut out, &strs(&["", "Country,Other", "TotalCases"]), ',');
        assert_eq!(out, ",\"Country,Other\",TotalCases\n");
    }

    #[test]
    fn embedded_quotes_are_doubled() {
        let mut out = s!();
        push_row(&mut out, &strs(&["Côte d\"Ivoire", "1.0"]), ',');
        assert_eq!(out, "\"Côte d\"\"Ivoire\",1.0\n");
    }

    #[test]
    fn tab_separator_leaves_commas_alone() {
        let mut out = s!();
        push_row(&mut out, &strs(&["Country,Other", "a\tb"]), '\t');
        assert_eq!(out, "Country,Other\t\"a\tb\"\n");
    }

    #[test]
    fn one_line_per_row() {
        let rows = vec![strs(&["", "x"]), strs(&["0", "1.0"]), strs(&["1", "2.5"])];
        assert_eq!(rows_to_string(&rows, ','), ",x\n0,1.0\n1,2.5\n");
        assert_eq!(rows_to_string(&[], ','), "");
    }
}
