use std::{
    fs,
    io::Write,
    path::PathBuf,
    process::{Command, Output, Stdio},
    time::{SystemTime, UNIX_EPOCH},
};

struct TestDir {
    path: PathBuf,
}

impl TestDir {
    fn new(tag: &str) -> Self {
        let ts = SystemTime::now().duration_since(UNIX_EPOCH)
                                  .map_or(0, |d| d.as_nanos());
        let path =
            std::env::temp_dir().join(format!("varcalc_cli_{tag}_{}_{}", std::process::id(), ts));
        fs::create_dir_all(&path).expect("create temp test dir");
        Self { path }
    }
}

impl Drop for TestDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

fn run_varcalc(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_varcalc")).args(args)
                                                              .env_remove("RUST_LOG")
                                                              .stdin(Stdio::piped())
                                                              .stdout(Stdio::piped())
                                                              .stderr(Stdio::piped())
                                                              .spawn()
                                                              .expect("run varcalc");
    child.stdin
         .take()
         .expect("stdin is piped")
         .write_all(stdin.as_bytes())
         .expect("write stdin");
    child.wait_with_output().expect("wait for varcalc")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn expression_argument_prints_result() {
    let output = run_varcalc(&["3 + 5 * (2 - 8)"], "");

    assert!(output.status.success(), "process failed: {output:?}");
    assert_eq!(stdout_of(&output), "Результат: -27.0\n");
}

#[test]
fn failure_prints_message_and_sets_exit_status() {
    let output = run_varcalc(&["1 / 0"], "");

    assert!(!output.status.success());
    assert_eq!(stdout_of(&output), "Ошибка: Деление на ноль.\n");
}

#[test]
fn stdin_expression_prompts_for_each_variable_once() {
    let output = run_varcalc(&[], "x + x\n4\n");
    let stdout = stdout_of(&output);

    assert!(output.status.success(), "process failed: {output:?}");
    assert!(stdout.starts_with("Введите выражение"), "missing greeting: {stdout}");
    assert_eq!(stdout.matches("Введите значение для переменной 'x': ").count(), 1);
    assert!(stdout.ends_with("Результат: 8.0\n"), "unexpected output: {stdout}");
}

#[test]
fn without_interactive_flag_only_one_line_is_evaluated() {
    let output = run_varcalc(&[], "1 + 1\n2 + 2\n");
    let stdout = stdout_of(&output);

    assert!(stdout.contains("Результат: 2.0"));
    assert!(!stdout.contains("Результат: 4.0"));
}

#[test]
fn interactive_session_keeps_bindings() {
    let output = run_varcalc(&["--interactive", "--show-vars"], "y\n3\n\ny * 2\n");
    let stdout = stdout_of(&output);

    assert!(output.status.success(), "process failed: {output:?}");
    assert_eq!(stdout.matches("Введите значение для переменной 'y': ").count(), 1);
    assert!(stdout.contains("Результат: 3.0"));
    assert!(stdout.contains("Результат: 6.0"));
    assert!(stdout.ends_with("y = 3.0\n"), "unexpected output: {stdout}");
}

#[test]
fn closed_stdin_while_prompting_is_an_error() {
    let output = run_varcalc(&["z + 1"], "");
    let stdout = stdout_of(&output);

    assert!(!output.status.success());
    assert!(stdout.contains("Ошибка: Не удалось получить значение переменной 'z'"),
            "unexpected output: {stdout}");
}

#[test]
fn file_lines_share_one_session() {
    let dir = TestDir::new("file_session");
    let script = dir.path.join("session.calc");
    fs::write(&script, "a * 2\n\n(a + 1) / 2\n").expect("write script");

    let output = run_varcalc(&["--file", script.to_str().expect("utf-8 path")], "5\n");
    let stdout = stdout_of(&output);

    assert!(output.status.success(), "process failed: {output:?}");
    assert_eq!(stdout.matches("Введите значение").count(), 1);
    assert!(stdout.contains("Результат: 10.0\n"));
    assert!(stdout.contains("Результат: 3.0\n"));
}

#[test]
fn missing_file_fails() {
    let dir = TestDir::new("missing_file");
    let missing = dir.path.join("nope.calc");

    let output = run_varcalc(&["-f", missing.to_str().expect("utf-8 path")], "");
    assert!(!output.status.success());
}

#[test]
fn max_depth_option_limits_nesting() {
    let output = run_varcalc(&["--max-depth", "1", "((1))"], "");

    assert!(!output.status.success());
    assert!(stdout_of(&output).starts_with("Ошибка: Выражение слишком сложное"));
}
