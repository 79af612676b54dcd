//! Protocol tests - end-to-end command scripts through the interpreter

use std::io::Cursor;

use learntris::core::GameState;
use learntris::protocol::{CommandInterpreter, Flow};
use learntris::types::{Color, PAUSE_TEXT, TITLE_TEXT};

type Interp = CommandInterpreter<Cursor<String>, Vec<u8>>;

fn interpreter(script: &str) -> Interp {
    CommandInterpreter::new(GameState::new(42), Cursor::new(script.to_string()), Vec::new())
}

fn output(interp: Interp) -> String {
    String::from_utf8(interp.into_output()).unwrap()
}

fn run(script: &str) -> String {
    let mut interp = interpreter(script);
    interp.run().unwrap();
    output(interp)
}

fn empty_row() -> String {
    vec!["."; 10].join(" ")
}

fn grid_text(rows: &[(usize, &str)]) -> String {
    let mut out = String::new();
    for y in 0..22 {
        let row = rows
            .iter()
            .find(|(ry, _)| *ry == y)
            .map(|(_, r)| r.to_string())
            .unwrap_or_else(empty_row);
        out.push_str(&row);
        out.push('\n');
    }
    out
}

#[test]
fn test_print_empty_grid() {
    assert_eq!(run("p\n"), grid_text(&[]));
}

#[test]
fn test_print_active_overlay() {
    let expected = grid_text(&[
        (0, ". . . . Y Y . . . ."),
        (1, ". . . . Y Y . . . ."),
    ]);
    assert_eq!(run("OP\n"), expected);
}

#[test]
fn test_o_drop_then_line_clear() {
    let mut interp = interpreter("");

    assert_eq!(interp.execute_line("O V ?n").unwrap(), Flow::Continue);
    for (x, y) in [(4, 20), (5, 20), (4, 21), (5, 21)] {
        assert_eq!(
            interp.state().grid().cell_at(x, y),
            Ok(Some(Color::Yellow))
        );
    }

    let grid = interp.state_mut().grid_mut();
    for x in (0..4).chain(6..10) {
        grid.set_cell(x, 21, Some(Color::Red)).unwrap();
    }

    interp.execute_line("s ?s ?n").unwrap();
    assert_eq!(output(interp), "0\n100\n1\n");
}

#[test]
fn test_load_grid_then_step() {
    let mut script = String::from("g\n");
    for _ in 0..21 {
        script.push_str(&empty_row());
        script.push('\n');
    }
    script.push_str("c c c c c c c c c c\n");
    script.push_str("s?s?np\n");

    let out = run(&script);
    assert_eq!(out, format!("100\n1\n{}", grid_text(&[])));
}

#[test]
fn test_load_grid_aborts_on_long_token() {
    let mut interp = interpreter("r . . . . . . . . .\n. rr . . . . . . . .\np\n");
    interp
        .state_mut()
        .grid_mut()
        .set_cell(0, 1, Some(Color::Blue))
        .unwrap();
    interp
        .state_mut()
        .grid_mut()
        .set_cell(3, 5, Some(Color::Green))
        .unwrap();

    interp.execute_line("g").unwrap();
    interp.run().unwrap();

    let expected = grid_text(&[
        (0, "r . . . . . . . . ."),
        (5, ". . . g . . . . . ."),
    ]);
    assert_eq!(output(interp), expected);
}

#[test]
fn test_load_grid_keeps_colors_before_bad_token() {
    let mut interp = interpreter("r r r r r r r r r r\ng . y rr . . . . . .\np\n");
    for x in 0..4 {
        interp
            .state_mut()
            .grid_mut()
            .set_cell(x, 1, Some(Color::Blue))
            .unwrap();
    }

    interp.execute_line("g").unwrap();
    interp.run().unwrap();

    let expected = grid_text(&[
        (0, "r r r r r r r r r r"),
        (1, "g . y b . . . . . ."),
    ]);
    assert_eq!(output(interp), expected);
}

#[test]
fn test_load_grid_aborts_on_short_line() {
    let out = run("g\nm m m\np\n");
    assert_eq!(out, grid_text(&[]));
}

#[test]
fn test_load_grid_stores_lowercase_colors() {
    let mut script = String::from("g\nO . . . . . . . . R\n");
    script.push_str("q\n");
    let mut interp = interpreter(&script);
    interp.run().unwrap();
    // The second grid line is "q", which aborts the load and is then not read again.
    assert_eq!(interp.state().grid().cell_at(0, 0), Ok(Some(Color::Orange)));
    assert_eq!(interp.state().grid().cell_at(9, 0), Ok(Some(Color::Red)));
}

#[test]
fn test_title_pause_cycle() {
    let out = run("@p!p!p!p!p\n");
    let grid = grid_text(&[]);
    let expected = format!("{TITLE_TEXT}\n{grid}{grid}{PAUSE_TEXT}\n{grid}");
    assert_eq!(out, expected);
}

#[test]
fn test_active_overlay_ignores_pause() {
    let out = run("!!P\n");
    assert!(out.ends_with(&format!("{}\n", empty_row())));
    assert!(!out.contains("Paused"));
}

#[test]
fn test_rotation_commands() {
    assert_eq!(run("T)t\n"), ". m .\n. m m\n. m .\n");
    assert_eq!(run("T(t\n"), ". m .\nm m .\n. m .\n");
    assert_eq!(run("I))t\n"), ". . . .\n. . . .\nc c c c\n. . . .\n");
}

#[test]
fn test_moves_against_wall_are_silent() {
    let expected = grid_text(&[
        (0, "Y Y . . . . . . . ."),
        (1, "Y Y . . . . . . . ."),
    ]);
    assert_eq!(run("O<<<<<<<<P\n"), expected);
}

#[test]
fn test_soft_drop_moves_one_row() {
    let expected = grid_text(&[
        (1, ". . . . M . . . . ."),
        (2, ". . . M M M . . . ."),
    ]);
    assert_eq!(run("Tv\nP\n"), expected);
}

#[test]
fn test_diagnostics_continue_the_line() {
    assert_eq!(
        run("x?s\n?k?n\n?\n"),
        ">>>Invalid command: x\n0\n>>>Invalid command: ?k\n0\n>>>Invalid command: ?\n"
    );
}

#[test]
fn test_quit_stops_run_loop() {
    assert_eq!(run("?sq\n?s\n"), "0\n");
}

#[test]
fn test_end_of_input_stops_run_loop() {
    assert_eq!(run("?n"), "0\n");
}

#[test]
fn test_clear_grid_command() {
    assert_eq!(run("OVcp\n"), grid_text(&[]));
}
