//! End-to-end pipeline tests: init → submit → history → export.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn avalia() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("avalia").unwrap()
}

const LEADER_FORM: &str = r#"
kind = "lider"

[info]
nome = "João Pereira"
area = "Usinagem"
periodo = "01/07 a 31/07/2025"
avaliadores = "Maria, Carlos"

[scores]
gestaoEquipe = 4
resultados = 5
comunicacao = 4
decisao = 4
recursos = 3
disciplina = 5
processos = 4
relatorios = 4
interacao = 5
desenvolvimento = 4

[qualit]
fortes = "Boa liderança"
melhorias = "Delegar mais"
acoes = "Treinamento de PCP"

[kpi]
oee = "78"
horasExtras = "12"
refugos = "1.2"
atrasoPlanejado = "3"
absenteismo = "2"

[freq]
reunioes = "Sim, diariamente"
prazos = "Sim"
priorizacao = "Sim"
"#;

const MEMBER_FORM: &str = r#"
kind = "liderado"
feedback = "Sem comentários"

[info]
nome = "Ana Souza"
funcao = "Operadora"
setor = "Montagem"
periodo = "Q2 2025"
lider = "João Pereira"

[scores]
assiduidade = 5
disciplina = 4
comprometimento = 5

[qualit]
evolucao = "Melhorou o ritmo"
"#;

fn setup() -> TempDir {
    let dir = TempDir::new().unwrap();

    avalia().current_dir(dir.path()).arg("init").assert().success();

    std::fs::write(dir.path().join("leader.toml"), LEADER_FORM).unwrap();
    std::fs::write(dir.path().join("member.toml"), MEMBER_FORM).unwrap();

    for form in ["leader.toml", "member.toml"] {
        avalia()
            .current_dir(dir.path())
            .arg("submit")
            .arg("--form")
            .arg(form)
            .assert()
            .success();
    }

    dir
}

#[test]
fn pipeline_history_json_is_ordered_and_flattened() {
    let dir = setup();

    let output = avalia()
        .current_dir(dir.path())
        .arg("history")
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let rows: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 2);

    // Most recent submission first.
    assert_eq!(rows[0]["id"], 2);
    assert_eq!(rows[0]["tipo"], "liderado");
    assert_eq!(rows[0]["nome"], "Ana Souza");
    assert_eq!(rows[0]["setor_area"], "Montagem");
    // (5+4+5)/3 = 4.67
    assert_eq!(rows[0]["score"], 4.67);
    assert_eq!(rows[0]["classificacao"], "Excelente");

    assert_eq!(rows[1]["id"], 1);
    assert_eq!(rows[1]["tipo"], "lider");
    assert_eq!(rows[1]["nome"], "João Pereira");
    assert_eq!(rows[1]["setor_area"], "Usinagem");
    // (4+5+4+4+3+5+4+4+5+4)/10 = 4.2
    assert_eq!(rows[1]["score"], 4.2);
    assert_eq!(rows[1]["classificacao"], "Bom");
}

#[test]
fn pipeline_history_limit() {
    let dir = setup();

    let output = avalia()
        .current_dir(dir.path())
        .arg("history")
        .arg("--limit")
        .arg("1")
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let rows: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(rows.as_array().unwrap().len(), 1);
    assert_eq!(rows[0]["id"], 2);
}

#[test]
fn pipeline_csv_export() {
    let dir = setup();

    avalia()
        .current_dir(dir.path())
        .arg("export")
        .arg("--output")
        .arg("historico.csv")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 2 row(s)"));

    let bytes = std::fs::read(dir.path().join("historico.csv")).unwrap();
    assert_eq!(&bytes[..3], b"\xef\xbb\xbf");

    let text = std::str::from_utf8(&bytes[3..]).unwrap();
    let mut lines = text.lines();
    assert_eq!(
        lines.next().unwrap(),
        "id,tipo,nome,setor_area,periodo,score,classificacao,created_at"
    );
    assert!(lines.next().unwrap().starts_with("2,liderado,Ana Souza,"));
    assert!(lines.next().unwrap().starts_with("1,lider,João Pereira,"));
}

#[test]
fn pipeline_json_export_single_record() {
    let dir = setup();

    avalia()
        .current_dir(dir.path())
        .arg("export")
        .arg("--id")
        .arg("1")
        .arg("--output")
        .arg("avaliacao.json")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported evaluation #1"));

    let text = std::fs::read_to_string(dir.path().join("avaliacao.json")).unwrap();
    assert!(text.contains("João Pereira"), "accents preserved literally: {text}");

    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["tipo"], "avaliacao_lider_producao");
    assert_eq!(value["score"], 4.2);
    assert_eq!(value["classificacao"], "Bom");
    assert_eq!(value["kpi"]["horasExtras"], "12");
    assert_eq!(value["freq"]["reunioes"], "Sim, diariamente");
    assert!(value["timestamp"].as_str().unwrap().ends_with('Z'));
}

#[test]
fn pipeline_submissions_survive_between_invocations() {
    let dir = setup();

    // A later submit appends, never overwrites.
    avalia()
        .current_dir(dir.path())
        .arg("submit")
        .arg("--form")
        .arg("member.toml")
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved evaluation #3"));

    let output = avalia()
        .current_dir(dir.path())
        .arg("history")
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let rows: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(rows.as_array().unwrap().len(), 3);
}
