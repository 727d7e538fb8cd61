use anyhow::Result;
use assert_cmd::Command;
use assert_fs::NamedTempFile;
use assert_fs::prelude::*;
use predicates::prelude::*;

const PIZZA: &str = "Prefix(:=<http://test.de/pizza#>)
Ontology(<http://test.de/pizza> <http://test.de/pizza/1.0>
    Declaration(Class(:Pizza))
    Declaration(Class(:Food))
    SubClassOf(:Pizza :Food)
)";

const UNDECLARED: &str = "Prefix(:=<http://test.de/pizza#>)
Ontology(<http://test.de/pizza>
    Declaration(Class(:Pizza))
    SubClassOf(:Pizza :Food)
)";

fn cli_command() -> Result<Command> {
    Ok(Command::cargo_bin("oxowlfn")?)
}

fn document(content: &str) -> Result<NamedTempFile> {
    let file = NamedTempFile::new("pizza.ofn")?;
    file.write_str(content)?;
    Ok(file)
}

#[test]
fn cli_help() -> Result<()> {
    cli_command()?
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("Usage"));
    Ok(())
}

#[test]
fn cli_parse_file() -> Result<()> {
    let file = document(PIZZA)?;
    cli_command()?
        .arg("parse")
        .arg(file.path())
        .assert()
        .success()
        .stdout(
            predicate::str::contains("ontology <http://test.de/pizza>\n")
                .and(predicate::str::contains("version <http://test.de/pizza/1.0>\n"))
                .and(predicate::str::contains("prefix : <http://test.de/pizza#>\n"))
                .and(predicate::str::contains("Class 2\n"))
                .and(predicate::str::contains("ObjectProperty 0\n"))
                .and(predicate::str::ends_with("axioms 1\n")),
        );
    Ok(())
}

#[test]
fn cli_parse_stdin() -> Result<()> {
    cli_command()?
        .arg("parse")
        .arg("-")
        .write_stdin(PIZZA)
        .assert()
        .success()
        .stdout(predicate::str::contains("Class 2\n"));
    Ok(())
}

#[test]
fn cli_parse_invalid() -> Result<()> {
    let file = document(UNDECLARED)?;
    cli_command()?
        .arg("parse")
        .arg(file.path())
        .assert()
        .failure()
        .stdout("")
        .stderr(
            predicate::str::contains("failed to parse").and(predicate::str::contains(
                "Unknown ref to <http://test.de/pizza#Food>. Expected class expression.",
            )),
        );
    Ok(())
}

#[test]
fn cli_parse_implicit_declarations() -> Result<()> {
    let file = document(UNDECLARED)?;
    cli_command()?
        .arg("parse")
        .arg("--implicit-declarations")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Class 2 (1 implicit)\n"));
    Ok(())
}

#[test]
fn cli_parse_missing_file() -> Result<()> {
    cli_command()?
        .arg("parse")
        .arg("does-not-exist.ofn")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to open does-not-exist.ofn"));
    Ok(())
}

#[test]
fn cli_declarations() -> Result<()> {
    let file = document(PIZZA)?;
    cli_command()?
        .arg("declarations")
        .arg("--kind")
        .arg("class")
        .arg(file.path())
        .assert()
        .success()
        .stdout("http://test.de/pizza#Food\nhttp://test.de/pizza#Pizza\n");
    Ok(())
}

#[test]
fn cli_declarations_explicit_only() -> Result<()> {
    let file = document(UNDECLARED)?;
    cli_command()?
        .arg("declarations")
        .arg("--kind")
        .arg("class")
        .arg("--implicit-declarations")
        .arg("--explicit-only")
        .arg(file.path())
        .assert()
        .success()
        .stdout("http://test.de/pizza#Pizza\n");
    Ok(())
}

#[test]
fn cli_prefix_binding() -> Result<()> {
    cli_command()?
        .arg("declarations")
        .arg("--kind")
        .arg("class")
        .arg("--prefix")
        .arg("p=http://test.de/pizza#")
        .arg("-")
        .write_stdin("Ontology(<http://test.de/pizza> Declaration(Class(p:Pizza)))")
        .assert()
        .success()
        .stdout("http://test.de/pizza#Pizza\n");
    cli_command()?
        .arg("parse")
        .arg("--prefix")
        .arg("p")
        .arg("-")
        .write_stdin("Ontology(<http://test.de/pizza>)")
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected NAME=IRI"));
    Ok(())
}

#[test]
fn cli_verbose() -> Result<()> {
    let file = document(PIZZA)?;
    cli_command()?
        .arg("parse")
        .arg("--verbose")
        .arg(file.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("http://test.de/pizza with"));
    Ok(())
}
