//! Procedure generation tests

use pretty_assertions::assert_eq;
use rust_sprocgen::{generate_from_script, Conventions};

const CUSTOMER: &str = "create table [dbo].[Widget$Customer])
[customer-id] [int] identity(1,1) not null,
[Name] [varchar](50) not null,
constraint [PK_Customer] primary key clustered
([customer-id] ASC)
";

const THREE_COLUMNS: &str = "CREATE TABLE [dbo].[Shop$Product](
[Product Id] [int] IDENTITY(1,1) NOT NULL,
[Sku] [varchar](20) NOT NULL,
[Unit-Price] [money] NOT NULL,
CONSTRAINT [PK_Product] PRIMARY KEY CLUSTERED
(
[Sku] ASC
)
)";

fn generate(script: &str) -> String {
    generate_from_script(script, &Conventions::default()).expect("generation should succeed")
}

/// Trimmed lines after the line starting with `start`, up to the line equal to `end`
fn section(sql: &str, start: &str, end: &str) -> Vec<String> {
    sql.lines()
        .skip_while(|l| !l.trim().starts_with(start))
        .skip(1)
        .take_while(|l| l.trim() != end)
        .map(|l| l.trim().to_string())
        .collect()
}

#[test]
fn test_parameters_follow_declaration_order() {
    let sql = generate(THREE_COLUMNS);
    let params = section(&sql, "create procedure", ")");
    let names: Vec<_> = params
        .iter()
        .map(|p| p.split_whitespace().last().unwrap_or_default().to_string())
        .collect();
    assert_eq!(names, vec!["@iProductId", "@iSku", "@iUnitPrice"]);
}

#[test]
fn test_identity_excluded_from_insert() {
    let sql = generate(THREE_COLUMNS);
    assert_eq!(
        section(&sql, "insert into", ")"),
        vec!["[Sku],", "[Unit-Price]"]
    );
    assert_eq!(section(&sql, "values(", ")"), vec!["@iSku,", "@iUnitPrice"]);
}

#[test]
fn test_key_predicate_uses_key_columns() {
    let sql = generate(THREE_COLUMNS);
    assert_eq!(section(&sql, "where", "))"), vec!["[Sku] = @iSku"]);
}

#[test]
fn test_customer_scenario() {
    let sql = generate(CUSTOMER);

    assert!(sql.starts_with("create procedure CustomerAdd(\n"));
    assert!(sql.contains("[customer-id] = @icustomerid"));
    assert_eq!(sql.matches("if(exists(").count(), 1);
    assert_eq!(section(&sql, "insert into", ")"), vec!["[Name]"]);
    assert_eq!(section(&sql, "values(", ")"), vec!["@iName"]);
}

#[test]
fn test_no_primary_key_has_insert_only() {
    let sql = generate(
        "CREATE TABLE [dbo].[A$Pair](
[Left] [int] NOT NULL,
[Right] [int] NOT NULL
)",
    );

    assert!(!sql.contains("if(exists("));
    assert!(!sql.contains("update"));
    assert!(!sql.contains("else"));
    assert_eq!(section(&sql, "insert into", ")"), vec!["[Left],", "[Right]"]);
    assert!(sql.ends_with("\t\t)\n\tend\nend\ngo\n"));
}

#[test]
fn test_parameter_padding_width() {
    let sql = generate(CUSTOMER);
    let param_line = sql
        .lines()
        .find(|l| l.contains("@iName") && l.starts_with('\t') && !l.contains('='))
        .expect("parameter line for [Name]");

    let after_tab = &param_line[1..];
    assert_eq!(after_tab.find("@iName"), Some(32));
}

#[test]
fn test_parameter_padding_for_long_name() {
    let name = "[This Column Name Is Longer Than Thirty Two]";
    let script = format!("CREATE TABLE [dbo].[A$B](\n{} [int] NOT NULL\n)", name);
    let sql = generate(&script);

    assert!(sql.contains(&format!("\t{}@iThisColumnNameIsLongerThanThirtyTwo\n", name)));
}

#[test]
fn test_output_is_deterministic() {
    assert_eq!(generate(THREE_COLUMNS), generate(THREE_COLUMNS));
}

#[test]
fn test_datatype_not_emitted() {
    let sql = generate(THREE_COLUMNS);
    assert!(!sql.contains("money"));
    assert!(!sql.contains("varchar"));
}

#[test]
fn test_key_line_with_index_options_keeps_update_branch() {
    let sql = generate(
        "CREATE TABLE [dbo].[Shop$Index Entry](
[Index] [int] NOT NULL,
[Is Primary Key] [bit] NOT NULL,
CONSTRAINT [PK_Index Entry] PRIMARY KEY CLUSTERED
([Index] ASC) WITH (PAD_INDEX = OFF) ON [PRIMARY]
)",
    );

    assert_eq!(sql.matches("if(exists(").count(), 1);
    assert_eq!(section(&sql, "where", "))"), vec!["[Index] = @iIndex"]);
}
