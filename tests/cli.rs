//! Integration tests for top-level CLI behavior.

use std::io::{self, Read, Write};
use std::net::TcpListener;
use std::process::{Command, Output, Stdio};
use std::thread;

fn hostkit() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_hostkit"));
    for var in ["HOSTKIT_TOKEN", "HOSTKIT_SHELL"] {
        cmd.env_remove(var);
    }
    cmd.env("NO_PROXY", "*").env("no_proxy", "*");
    cmd
}

fn run_hostkit(args: &[&str]) -> Output {
    hostkit().args(args).output().expect("failed to run hostkit binary")
}

fn run_with_stdin(args: &[&str], stdin: &str) -> Output {
    let mut child = hostkit()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn hostkit binary");
    child.stdin.take().unwrap().write_all(stdin.as_bytes()).unwrap();
    child.wait_with_output().unwrap()
}

type Server = thread::JoinHandle<io::Result<String>>;

/// Answers one HTTP request and returns the lowercased request head.
fn serve_once(status_line: &'static str, body: &'static str) -> (String, Server) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/data", listener.local_addr().unwrap());
    let handle = thread::spawn(move || {
        let (mut socket, _) = listener.accept()?;
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf)?;
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        write!(
            socket,
            "HTTP/1.1 {status_line}\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        )?;
        Ok::<_, io::Error>(String::from_utf8_lossy(&request).to_lowercase())
    });
    (url, handle)
}

fn request_head(server: Server) -> String {
    match server.join() {
        Ok(Ok(head)) => head,
        Ok(Err(e)) => panic!("test server I/O failed: {e}"),
        Err(_) => panic!("test server thread panicked"),
    }
}

#[cfg(unix)]
#[test]
fn exec_prints_stdout() {
    let output = run_hostkit(&["exec", "echo hello; echo world"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "hello\nworld\n");
}

#[cfg(unix)]
#[test]
fn exec_failure_reports_stderr_only() {
    let output = run_hostkit(&["exec", "echo partial; echo 'it broke' >&2; exit 7"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert_eq!(String::from_utf8_lossy(&output.stderr).trim_end(), "it broke");
}

#[cfg(unix)]
#[test]
fn exec_honors_shell_override() {
    let output = hostkit().env("HOSTKIT_SHELL", "bash").args(["exec", "echo $0"]).output().unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "bash\n");
}

#[test]
fn ask_writes_prompt_and_classifies_yes() {
    let output = run_with_stdin(&["ask", "Continue?"], "yep\n");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Continue? yes\n");
}

#[test]
fn ask_classifies_no_and_empty_input() {
    let output = run_with_stdin(&["ask", "Delete?"], "no thanks\n");
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Delete? no\n");

    let output = run_with_stdin(&["ask", "Delete?"], "");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Delete? no\n");
}

#[test]
fn fetch_writes_body_and_sends_token() {
    let (url, server) = serve_once("200 OK", "binary-ish body");
    let output = run_hostkit(&["fetch", &url, "--token", "abc123"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(output.stdout, b"binary-ish body");
    assert!(request_head(server).contains("authorization: bearer abc123\r\n"));
}

#[test]
fn fetch_uses_env_token_and_saves_to_file() {
    let (url, server) = serve_once("404 Not Found", "gone");
    let path = std::env::temp_dir().join("hostkit_cli_fetch.bin");
    let output = hostkit()
        .env("HOSTKIT_TOKEN", "from-env")
        .args(["fetch", &url, "--output", path.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(std::fs::read(&path).unwrap(), b"gone");
    assert!(request_head(server).contains("authorization: bearer from-env\r\n"));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn head_prints_status_without_authorization() {
    let (url, server) = serve_once("404 Not Found", "missing");
    let output = run_hostkit(&["head", &url]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.starts_with("HTTP/1.1 404 Not Found\n"));
    assert!(stdout.contains("content-length: 7\n"));
    assert!(!request_head(server).contains("authorization:"));
}

#[test]
fn fetch_connection_failure_exits_with_error() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/", listener.local_addr().unwrap());
    drop(listener);

    let output = run_hostkit(&["fetch", &url]);
    assert!(!output.status.success());
    assert!(!output.stderr.is_empty());
}

#[test]
fn invalid_subcommand_exits_with_error() {
    let output = run_hostkit(&["nonsense"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("unrecognized subcommand"));
}
