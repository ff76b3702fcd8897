//! Emitters for parsed calendars: one JSON document per calendar file and
//! one SQL statement batch per year.

mod json;
mod sql;

pub use json::{JSON_INDENT, json_output_path, render_json, write_json};
pub use sql::{
    SqlBatch, escape_literal, insert_statement, render_employee_block, sql_file_name,
};
