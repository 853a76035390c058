mod utils;

use clap::Parser;
use promptkit::{cli::dispatch, cli::Cli, Error};
use test_log::test;
use utils::{template_dir, BASIC_TEMPLATES, CHAIN_TEMPLATES};

fn run_args(args: &[&str]) -> Result<String, Error> {
    let cli = Cli::try_parse_from(std::iter::once("promptkit").chain(args.iter().copied()))
        .unwrap();
    let mut out = Vec::new();
    dispatch(cli.command, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn test_render_command() {
    let output =
        run_args(&["render", "greet", "-d", BASIC_TEMPLATES, "--var", "name=World"]).unwrap();
    assert_eq!(output, "Hello, World!\n");
}

#[test]
fn test_render_command_with_json_vars() {
    let output = run_args(&[
        "render",
        "greet",
        "--dir",
        BASIC_TEMPLATES,
        "--vars",
        r#"{"name": "Json"}"#,
        "--var",
        "name=Flag",
    ])
    .unwrap();
    assert_eq!(output, "Hello, Flag!\n");
}

#[test]
fn test_render_command_missing_variable() {
    let err = run_args(&["render", "greet", "-d", BASIC_TEMPLATES]).unwrap_err();
    assert_eq!(err.missing_variables(), Some(&["name".to_string()][..]));
}

#[test]
fn test_validate_command() {
    let output = run_args(&["validate", "summarize", "-d", BASIC_TEMPLATES]).unwrap();
    assert_eq!(output, "Required variables for 'summarize':\n  - document\n  - max_words\n");

    let output = run_args(&["validate", "plain", "-d", BASIC_TEMPLATES]).unwrap();
    assert_eq!(output, "No required variables.\n");
}

#[test]
fn test_validate_command_with_vars() {
    let output =
        run_args(&["validate", "greet", "-d", BASIC_TEMPLATES, "--var", "name=x"]).unwrap();
    assert!(output.ends_with("All required variables supplied.\n"));

    let err = run_args(&["validate", "summarize", "-d", BASIC_TEMPLATES, "--var", "document=x"])
        .unwrap_err();
    assert_eq!(err.missing_variables(), Some(&["max_words".to_string()][..]));
}

#[test]
fn test_list_command() {
    let output = run_args(&["ls", "-d", BASIC_TEMPLATES]).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("farewell") && lines[0].ends_with("A farewell"));
    assert!(lines[2].starts_with("plain") && lines[2].ends_with("(no description)"));
}

#[test]
fn test_list_command_empty_dir() {
    let dir = template_dir(&[("notes.txt", "not a template")]);
    let output = run_args(&["list", "-d", dir.path().to_str().unwrap()]).unwrap();
    assert_eq!(output, "No templates found.\n");
}

#[test]
fn test_chain_command() {
    let chain_file = format!("{CHAIN_TEMPLATES}/pipeline.yaml");
    let output = run_args(&[
        "chain",
        &chain_file,
        "-d",
        CHAIN_TEMPLATES,
        "--var",
        "user_input=hello",
    ])
    .unwrap();
    assert_eq!(output, "Final: Processed: hello");
}

#[test]
fn test_chain_command_show_intermediates() {
    let chain_file = format!("{CHAIN_TEMPLATES}/pipeline.yaml");
    let output = run_args(&[
        "chain",
        &chain_file,
        "-d",
        CHAIN_TEMPLATES,
        "--var",
        "user_input=hi",
        "--show-intermediates",
    ])
    .unwrap();
    assert_eq!(
        output,
        "=== step_one_out ===\nProcessed: hi\n=== final_out ===\nFinal: Processed: hi\n=== output ===\nFinal: Processed: hi"
    );
}

#[test]
fn test_chain_command_strict() {
    let chain_file = format!("{CHAIN_TEMPLATES}/pipeline.yaml");
    let err = run_args(&["chain", &chain_file, "-d", CHAIN_TEMPLATES, "--strict"]).unwrap_err();
    assert_eq!(err.step(), Some(1));
}

#[test]
fn test_strict_resolution_from_config() {
    let dir = template_dir(&[
        ("promptkit.yaml", "strict_resolution: true\n"),
        ("echo.tmpl", "{{ value }}"),
        (
            "chain.yaml",
            "name: c\nsteps:\n  - template: echo\n    vars:\n      value: \"{{ unknown }}\"\n",
        ),
    ]);
    let root = dir.path().to_str().unwrap();
    let chain_file = dir.path().join("chain.yaml");

    let err = run_args(&["chain", chain_file.to_str().unwrap(), "-d", root]).unwrap_err();
    assert!(matches!(
        err,
        Error::StepError { ref source, .. } if matches!(**source, Error::VariableResolutionError { .. })
    ));
}

#[test]
fn test_invalid_var_flag() {
    let err = run_args(&["render", "greet", "-d", BASIC_TEMPLATES, "--var", "novalue"])
        .unwrap_err();
    assert!(matches!(err, Error::InvalidVariable(ref pair) if pair == "novalue"));
}
