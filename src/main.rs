use std::cmp::min;
use std::env;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Write};
use std::iter;
use std::mem;
use std::os::unix::io::RawFd;
use std::process;
use std::str::from_utf8;

use anyhow::{Context, Result};
use termios::*;
use time::OffsetDateTime;

const VERSION: &str = "0.0.1";
const TAB_STOP: usize = 8;
const QUIT_TIMES: u8 = 3;

const CLEAR: &[u8] = b"\x1b[2J";
const CLEAR_LINE: &[u8] = b"\x1b[K";
const CURSOR_HOME: &[u8] = b"\x1b[H";
const HIDE_CURSOR: &[u8] = b"\x1b[?25l";
const SHOW_CURSOR: &[u8] = b"\x1b[?25h";
const INVERT: &[u8] = b"\x1b[7m";
const RESET_ATTRS: &[u8] = b"\x1b[m";
const RESET_FG: &[u8] = b"\x1b[39m";

const fn ctrl(c: u8) -> u8 {
    c & 0x1f
}

const CTRL_F: u8 = ctrl(b'f');
const CTRL_H: u8 = ctrl(b'h');
const CTRL_L: u8 = ctrl(b'l');
const CTRL_Q: u8 = ctrl(b'q');
const CTRL_S: u8 = ctrl(b's');

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Arrow {
    Left,
    Right,
    Up,
    Down,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Key {
    Arrow(Arrow),
    Home,
    End,
    Del,
    PageUp,
    PageDown,
    Enter,
    Backspace,
    Escape,
    Byte(u8),
}

/// Puts the tty into raw mode on construction and restores the saved
/// attributes (after clearing the screen) when dropped, on every exit path.
struct RawTerm {
    fd: RawFd,
    orig: Termios,
}

impl RawTerm {
    fn enable(fd: RawFd) -> io::Result<RawTerm> {
        let orig = Termios::from_fd(fd)?;
        let mut raw = orig;
        raw.c_iflag &= !(BRKINT | ICRNL | INPCK | ISTRIP | IXON);
        raw.c_oflag &= !OPOST;
        raw.c_cflag |= CS8;
        raw.c_lflag &= !(ECHO | ICANON | IEXTEN | ISIG);
        // poll reads: return after 100ms with nothing rather than block
        raw.c_cc[VMIN] = 0;
        raw.c_cc[VTIME] = 1;
        tcsetattr(fd, TCSANOW, &raw)?;
        Ok(RawTerm { fd, orig })
    }
}

impl Drop for RawTerm {
    fn drop(&mut self) {
        let mut out = io::stdout();
        let _ = out.write_all(CLEAR);
        let _ = out.write_all(CURSOR_HOME);
        let _ = out.flush();
        let _ = tcsetattr(self.fd, TCSANOW, &self.orig);
    }
}

fn ioctl_window_size() -> io::Result<(u16, u16)> {
    let mut ws: libc::winsize = unsafe { mem::zeroed() };
    if unsafe { libc::ioctl(libc::STDIN_FILENO, libc::TIOCGWINSZ, &mut ws) } == -1 {
        return Err(io::Error::last_os_error());
    }
    if ws.ws_col == 0 {
        return Err(io::Error::new(io::ErrorKind::Other, "ioctl reported zero width"));
    }
    Ok((ws.ws_row, ws.ws_col))
}

/// Fallback for terminals where TIOCGWINSZ fails: push the cursor to the
/// bottom-right corner and ask the terminal where it ended up.
fn probe_window_size() -> io::Result<(u16, u16)> {
    let mut out = io::stdout();
    out.write_all(b"\x1b[999C\x1b[999B\x1b[6n")?;
    out.flush()?;

    let mut reply = Vec::new();
    io::stdin().lock().read_until(b'R', &mut reply)?;
    parse_cursor_report(&reply)
}

/// Parses a DSR cursor position report of the form `ESC [ rows ; cols R`.
fn parse_cursor_report(reply: &[u8]) -> io::Result<(u16, u16)> {
    let malformed = || io::Error::new(io::ErrorKind::InvalidData, "malformed cursor report");
    let body = reply
        .strip_prefix(b"\x1b[")
        .and_then(|r| r.strip_suffix(b"R"))
        .ok_or_else(malformed)?;
    let body = from_utf8(body).map_err(|_| malformed())?;
    let mut fields = body.split(';').map(str::parse::<u16>);
    match (fields.next(), fields.next(), fields.next()) {
        (Some(Ok(rows)), Some(Ok(cols)), None) => Ok((rows, cols)),
        _ => Err(malformed()),
    }
}

fn window_size() -> io::Result<(u16, u16)> {
    ioctl_window_size().or_else(|_| probe_window_size())
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Highlight {
    Normal,
    Number,
    Match,
}

impl Highlight {
    fn color(self) -> u8 {
        match self {
            Highlight::Number => 31,
            Highlight::Match => 34,
            Highlight::Normal => 37,
        }
    }
}

/// One line of the buffer: the bytes as stored in the file, the rendered
/// form with tabs expanded, and a classification per rendered byte. Rows are
/// raw bytes end to end, so any value 0-255 round-trips through edit and save.
struct Row {
    chars: Vec<u8>,
    render: Vec<u8>,
    hl: Vec<Highlight>,
}

impl Row {
    fn from(chars: Vec<u8>) -> Row {
        let mut row = Row {
            chars,
            render: Vec::new(),
            hl: Vec::new(),
        };
        row.update();
        row
    }

    fn update(&mut self) {
        let tabs = self.chars.iter().filter(|&&b| b == b'\t').count();
        let mut render = Vec::with_capacity(self.chars.len() + tabs * (TAB_STOP - 1));
        for &b in &self.chars {
            if b == b'\t' {
                render.push(b' ');
                while render.len() % TAB_STOP != 0 {
                    render.push(b' ');
                }
            } else {
                render.push(b);
            }
        }
        self.render = render;
        self.update_syntax();
    }

    fn update_syntax(&mut self) {
        self.hl = vec![Highlight::Normal; self.render.len()];
        for (i, b) in self.render.iter().enumerate() {
            if b.is_ascii_digit() {
                self.hl[i] = Highlight::Number;
            }
        }
    }

    fn cx_to_rx(&self, cx: usize) -> usize {
        let mut rx = 0;
        for &b in self.chars.iter().take(cx) {
            if b == b'\t' {
                rx += (TAB_STOP - 1) - (rx % TAB_STOP);
            }
            rx += 1;
        }
        rx
    }

    /// Smallest source column whose rendered width exceeds `rx`.
    fn rx_to_cx(&self, rx: usize) -> usize {
        let mut cur_rx = 0;
        for (cx, &b) in self.chars.iter().enumerate() {
            if b == b'\t' {
                cur_rx += (TAB_STOP - 1) - (cur_rx % TAB_STOP);
            }
            cur_rx += 1;
            if cur_rx > rx {
                return cx;
            }
        }
        self.chars.len()
    }

    fn insert_char(&mut self, at: usize, c: u8) {
        let at = min(at, self.chars.len());
        self.chars.insert(at, c);
        self.update();
    }

    fn delete_char(&mut self, at: usize) {
        if at >= self.chars.len() {
            return;
        }
        self.chars.remove(at);
        self.update();
    }

    fn append_bytes(&mut self, s: &[u8]) {
        self.chars.extend_from_slice(s);
        self.update();
    }

    fn split_off(&mut self, at: usize) -> Row {
        let suffix = self.chars.split_off(at);
        self.update();
        Row::from(suffix)
    }
}

type PromptCallback = fn(&mut Editor, &str, Key);

struct Editor {
    screen_rows: usize,
    screen_cols: usize,

    // cursor position in the source row, and its rendered column
    cx: usize,
    cy: usize,
    rx: usize,

    rows: Vec<Row>,
    row_off: usize,
    col_off: usize,

    filename: String,
    dirty: usize,
    quit_times: u8,
    status_msg: String,
    status_time: OffsetDateTime,

    find_last_match: Option<usize>,
    find_forward: bool,
}

impl Editor {
    fn new(window_rows: usize, window_cols: usize) -> Editor {
        Editor {
            // leave two rows for the status and message bars
            screen_rows: window_rows.saturating_sub(2),
            screen_cols: window_cols,
            cx: 0,
            cy: 0,
            rx: 0,
            rows: Vec::new(),
            row_off: 0,
            col_off: 0,
            filename: String::new(),
            dirty: 0,
            quit_times: QUIT_TIMES,
            status_msg: String::new(),
            status_time: OffsetDateTime::UNIX_EPOCH,
            find_last_match: None,
            find_forward: true,
        }
    }

    fn open(&mut self, filename: &str) -> io::Result<()> {
        self.filename = filename.to_owned();
        let mut reader = BufReader::new(File::open(filename)?);
        let mut line = Vec::new();
        loop {
            line.clear();
            if reader.read_until(b'\n', &mut line)? == 0 {
                break;
            }
            // drop the line terminator, CRLF or bare LF
            if line.last() == Some(&b'\n') {
                line.pop();
            }
            if line.last() == Some(&b'\r') {
                line.pop();
            }
            let at = self.rows.len();
            self.insert_row(at, line.clone());
        }
        self.dirty = 0;
        Ok(())
    }

    fn rows_to_bytes(&self) -> Vec<u8> {
        self.rows.iter().fold(Vec::new(), |mut v, row| {
            v.extend_from_slice(&row.chars);
            v.push(b'\n');
            v
        })
    }

    fn save(&mut self, input: &mut impl Read, out: &mut impl Write) -> io::Result<()> {
        if self.filename.is_empty() {
            let name = self.prompt(input, out, "Save as: {} (ESC to cancel)", None)?;
            if name.is_empty() {
                self.set_status_message("Save aborted".to_owned());
                return Ok(());
            }
            self.filename = name;
        }

        let contents = self.rows_to_bytes();
        match File::create(&self.filename).and_then(|mut f| f.write_all(&contents)) {
            Ok(()) => {
                // only clear dirty if the write worked
                self.dirty = 0;
                self.set_status_message(format!("{} bytes written to disk", contents.len()));
            }
            Err(e) => self.set_status_message(format!("Can't save! I/O error: {}", e)),
        }
        Ok(())
    }

    fn insert_row(&mut self, at: usize, chars: Vec<u8>) {
        if at > self.rows.len() {
            return;
        }
        self.rows.insert(at, Row::from(chars));
        self.dirty += 1;
    }

    fn delete_row(&mut self, at: usize) {
        if at >= self.rows.len() {
            return;
        }
        self.rows.remove(at);
        self.dirty += 1;
    }

    fn insert_char(&mut self, c: u8) {
        if self.cy == self.rows.len() {
            self.insert_row(self.cy, Vec::new());
        }
        self.rows[self.cy].insert_char(self.cx, c);
        self.cx += 1;
        self.dirty += 1;
    }

    fn insert_newline(&mut self) {
        if self.cx == 0 {
            self.insert_row(self.cy, Vec::new());
        } else {
            let suffix = self.rows[self.cy].split_off(self.cx);
            self.rows.insert(self.cy + 1, suffix);
            self.dirty += 1;
        }
        self.cy += 1;
        self.cx = 0;
    }

    fn delete_char(&mut self) {
        if self.cy == self.rows.len() || (self.cx == 0 && self.cy == 0) {
            return;
        }
        if self.cx > 0 {
            self.rows[self.cy].delete_char(self.cx - 1);
            self.cx -= 1;
            self.dirty += 1;
        } else {
            let merged = self.rows[self.cy].chars.clone();
            self.cx = self.rows[self.cy - 1].chars.len();
            self.rows[self.cy - 1].append_bytes(&merged);
            self.dirty += 1;
            self.delete_row(self.cy);
            self.cy -= 1;
        }
    }

    fn move_cursor(&mut self, key: Arrow) {
        match key {
            Arrow::Left => {
                if self.cx > 0 {
                    self.cx -= 1;
                } else if self.cy > 0 {
                    self.cy -= 1;
                    self.cx = self.rows[self.cy].chars.len();
                }
            }
            Arrow::Right => {
                if let Some(row) = self.rows.get(self.cy) {
                    if self.cx < row.chars.len() {
                        self.cx += 1;
                    } else {
                        self.cy += 1;
                        self.cx = 0;
                    }
                }
            }
            Arrow::Up => {
                if self.cy > 0 {
                    self.cy -= 1;
                }
            }
            Arrow::Down => {
                if self.cy < self.rows.len() {
                    self.cy += 1;
                }
            }
        }

        // limit cursor to end of line
        let row_len = self.rows.get(self.cy).map_or(0, |r| r.chars.len());
        if self.cx > row_len {
            self.cx = row_len;
        }
    }

    fn set_status_message(&mut self, msg: String) {
        self.status_msg = msg;
        self.status_time = OffsetDateTime::now_utc();
    }

    fn scroll(&mut self) {
        self.rx = match self.rows.get(self.cy) {
            Some(row) => row.cx_to_rx(self.cx),
            None => 0,
        };
        if self.cy < self.row_off {
            self.row_off = self.cy;
        }
        if self.cy >= self.row_off + self.screen_rows {
            self.row_off = self.cy - self.screen_rows + 1;
        }
        // leftward overflow snaps the window back to column zero
        if self.rx < self.col_off {
            self.col_off = 0;
        }
        if self.rx >= self.col_off + self.screen_cols {
            self.col_off = self.rx - self.screen_cols + 1;
        }
    }

    fn process_keypress(&mut self, input: &mut impl Read, out: &mut impl Write) -> io::Result<bool> {
        let key = read_key(input)?;
        match key {
            Key::Enter => self.insert_newline(),
            Key::Byte(CTRL_Q) => {
                if self.dirty > 0 && self.quit_times > 0 {
                    let left = self.quit_times;
                    self.set_status_message(format!(
                        "WARNING!!! File has unsaved changes. Press Ctrl-Q {} more times to quit.",
                        left
                    ));
                    self.quit_times -= 1;
                    return Ok(true);
                }
                return Ok(false);
            }
            Key::Byte(CTRL_S) => self.save(input, out)?,
            Key::Byte(CTRL_F) => self.find(input, out)?,
            Key::Arrow(arrow) => self.move_cursor(arrow),
            Key::Home => self.cx = 0,
            Key::End => {
                if self.cy < self.rows.len() {
                    self.cx = self.rows[self.cy].chars.len();
                }
            }
            Key::Backspace | Key::Byte(CTRL_H) => self.delete_char(),
            Key::Del => {
                self.move_cursor(Arrow::Right);
                self.delete_char();
            }
            Key::PageUp | Key::PageDown => {
                let arrow = if key == Key::PageUp {
                    self.cy = self.row_off;
                    Arrow::Up
                } else {
                    self.cy = min(self.row_off + self.screen_rows - 1, self.rows.len());
                    Arrow::Down
                };
                for _ in 0..self.screen_rows {
                    self.move_cursor(arrow);
                }
            }
            Key::Escape | Key::Byte(CTRL_L) => (),
            Key::Byte(c) => self.insert_char(c),
        }
        self.quit_times = QUIT_TIMES;
        Ok(true)
    }

    /// Modal line editor over the message bar. The screen is refreshed on
    /// every keystroke; `callback` (if any) sees the query after each key,
    /// and sees the terminating Enter/Escape exactly once.
    fn prompt(
        &mut self,
        input: &mut impl Read,
        out: &mut impl Write,
        template: &str,
        callback: Option<PromptCallback>,
    ) -> io::Result<String> {
        let mut query = String::new();
        loop {
            self.set_status_message(template.replace("{}", &query));
            self.refresh_screen(out);

            let key = read_key(input)?;
            match key {
                Key::Backspace | Key::Del | Key::Byte(CTRL_H) => {
                    query.pop();
                }
                Key::Escape => {
                    self.set_status_message(String::new());
                    if let Some(cb) = callback {
                        cb(self, &query, key);
                    }
                    return Ok(String::new());
                }
                Key::Enter if !query.is_empty() => {
                    self.set_status_message(String::new());
                    if let Some(cb) = callback {
                        cb(self, &query, key);
                    }
                    return Ok(query);
                }
                Key::Byte(c) if !c.is_ascii_control() && c < 128 => query.push(c as char),
                _ => (),
            }

            if let Some(cb) = callback {
                cb(self, &query, key);
            }
        }
    }

    fn find(&mut self, input: &mut impl Read, out: &mut impl Write) -> io::Result<()> {
        let saved_cx = self.cx;
        let saved_cy = self.cy;
        let saved_col_off = self.col_off;
        let saved_row_off = self.row_off;

        self.find_last_match = None;
        self.find_forward = true;

        let query = self.prompt(
            input,
            out,
            "Search: {} (Use ESC/Arrows/Enter)",
            Some(find_callback),
        )?;

        if query.is_empty() {
            self.cx = saved_cx;
            self.cy = saved_cy;
            self.col_off = saved_col_off;
            self.row_off = saved_row_off;
        }
        Ok(())
    }

    // stdout errors while drawing are dropped; the next frame repaints anyway
    fn refresh_screen(&mut self, out: &mut impl Write) {
        let frame = self.render_frame();
        let _ = out.write_all(&frame);
        let _ = out.flush();
    }

    fn render_frame(&mut self) -> Vec<u8> {
        self.scroll();
        let mut v = Vec::new();
        v.extend_from_slice(HIDE_CURSOR);
        v.extend_from_slice(CURSOR_HOME);
        v.extend(self.draw_rows());
        v.extend(self.draw_status_bar());
        v.extend(self.draw_message_bar());
        v.extend(cursor_to(self.cy - self.row_off + 1, self.rx - self.col_off + 1));
        v.extend_from_slice(SHOW_CURSOR);
        v
    }

    fn draw_rows(&self) -> Vec<u8> {
        let mut v = Vec::new();
        for y in 0..self.screen_rows {
            let file_row = y + self.row_off;
            if file_row >= self.rows.len() {
                if self.rows.is_empty() && y == self.screen_rows / 3 {
                    let mut welcome = format!("Kilo editor -- version {}", VERSION);
                    welcome.truncate(self.screen_cols);
                    let mut padding = (self.screen_cols - welcome.len()) / 2;
                    if padding > 0 {
                        v.push(b'~');
                        padding -= 1;
                    }
                    v.extend(iter::repeat(b' ').take(padding));
                    v.extend_from_slice(welcome.as_bytes());
                } else {
                    v.push(b'~');
                }
            } else {
                let row = &self.rows[file_row];
                let end = min(row.render.len(), self.col_off + self.screen_cols);
                let start = min(self.col_off, end);
                let mut current: Option<u8> = None;
                for (b, h) in row.render[start..end].iter().zip(&row.hl[start..end]) {
                    if *h == Highlight::Normal {
                        if current.is_some() {
                            v.extend_from_slice(RESET_FG);
                            current = None;
                        }
                    } else {
                        let color = h.color();
                        if current != Some(color) {
                            v.extend_from_slice(format!("\x1b[{}m", color).as_bytes());
                            current = Some(color);
                        }
                    }
                    v.push(*b);
                }
                v.extend_from_slice(RESET_FG);
            }
            v.extend_from_slice(CLEAR_LINE);
            v.extend_from_slice(b"\r\n");
        }
        v
    }

    fn draw_status_bar(&self) -> Vec<u8> {
        let mut v = Vec::new();
        v.extend_from_slice(INVERT);

        let name = if self.filename.is_empty() {
            "[No Name]"
        } else {
            &self.filename
        };
        let left = format!(
            "{:.20} - {} lines {}",
            name,
            self.rows.len(),
            if self.dirty > 0 { "(modified)" } else { "" }
        );
        let right = format!("{}/{}", self.cy + 1, self.rows.len());

        let mut len = min(left.len(), self.screen_cols);
        v.extend_from_slice(&left.as_bytes()[..len]);
        while len < self.screen_cols {
            if self.screen_cols - len == right.len() {
                v.extend_from_slice(right.as_bytes());
                break;
            }
            v.push(b' ');
            len += 1;
        }

        v.extend_from_slice(RESET_ATTRS);
        v.extend_from_slice(b"\r\n");
        v
    }

    fn draw_message_bar(&self) -> Vec<u8> {
        let mut v = Vec::new();
        v.extend_from_slice(CLEAR_LINE);
        let len = min(self.status_msg.len(), self.screen_cols);
        if len > 0 && (OffsetDateTime::now_utc() - self.status_time).whole_seconds() < 5 {
            v.extend_from_slice(&self.status_msg.as_bytes()[..len]);
        }
        v
    }
}

/// Incremental search over the rendered rows, driven by the prompt. Arrow
/// keys pick the direction; any other key restarts from the current query.
fn find_callback(editor: &mut Editor, query: &str, key: Key) {
    match key {
        Key::Enter | Key::Escape => {
            editor.find_last_match = None;
            editor.find_forward = true;
            return;
        }
        Key::Arrow(Arrow::Right) | Key::Arrow(Arrow::Down) => editor.find_forward = true,
        Key::Arrow(Arrow::Left) | Key::Arrow(Arrow::Up) => editor.find_forward = false,
        _ => {
            editor.find_last_match = None;
            editor.find_forward = true;
        }
    }

    if editor.find_last_match.is_none() {
        editor.find_forward = true;
    }
    let nrows = editor.rows.len() as isize;
    let step: isize = if editor.find_forward { 1 } else { -1 };
    let mut current = editor.find_last_match.map_or(-1, |m| m as isize);
    for _ in 0..editor.rows.len() {
        current += step;
        if current < 0 {
            current = nrows - 1;
        } else if current >= nrows {
            current = 0;
        }

        let at = current as usize;
        if let Some(idx) = find_bytes(&editor.rows[at].render, query.as_bytes()) {
            editor.find_last_match = Some(at);
            editor.cy = at;
            editor.cx = editor.rows[at].rx_to_cx(idx);
            // past-the-end offset so the next scroll lands the match on screen
            editor.row_off = editor.rows.len();
            for h in &mut editor.rows[at].hl[idx..idx + query.len()] {
                *h = Highlight::Match;
            }
            break;
        }
    }
}

/// First index of `needle` in `haystack`; an empty needle matches at 0.
fn find_bytes(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

fn read_byte(input: &mut impl Read) -> io::Result<Option<u8>> {
    let mut buf = [0u8; 1];
    match input.read(&mut buf)? {
        0 => Ok(None),
        _ => Ok(Some(buf[0])),
    }
}

/// Blocks until a key arrives, then folds any escape sequence into a single
/// logical key. Sequences that time out or are unrecognized decay to Escape.
fn read_key(input: &mut impl Read) -> io::Result<Key> {
    let c = loop {
        if let Some(b) = read_byte(input)? {
            break b;
        }
    };

    if c == b'\x1b' {
        if let (Some(c1), Some(c2)) = (read_byte(input)?, read_byte(input)?) {
            match (c1, c2) {
                (b'[', b'0'..=b'9') => {
                    if let Some(b'~') = read_byte(input)? {
                        match c2 {
                            b'1' | b'7' => return Ok(Key::Home),
                            b'3' => return Ok(Key::Del),
                            b'4' | b'8' => return Ok(Key::End),
                            b'5' => return Ok(Key::PageUp),
                            b'6' => return Ok(Key::PageDown),
                            _ => (),
                        }
                    }
                }
                (b'[', b'A') => return Ok(Key::Arrow(Arrow::Up)),
                (b'[', b'B') => return Ok(Key::Arrow(Arrow::Down)),
                (b'[', b'C') => return Ok(Key::Arrow(Arrow::Right)),
                (b'[', b'D') => return Ok(Key::Arrow(Arrow::Left)),
                (b'[', b'H') | (b'O', b'H') => return Ok(Key::Home),
                (b'[', b'F') | (b'O', b'F') => return Ok(Key::End),
                _ => (),
            }
        }
        return Ok(Key::Escape);
    }

    Ok(match c {
        127 => Key::Backspace,
        b'\r' => Key::Enter,
        _ => Key::Byte(c),
    })
}

fn cursor_to(row: usize, col: usize) -> Vec<u8> {
    format!("\x1b[{};{}H", row, col).into_bytes()
}

fn run() -> Result<()> {
    let _guard = RawTerm::enable(libc::STDIN_FILENO).context("enable raw mode")?;
    let (window_rows, window_cols) = window_size().context("get window size")?;
    let mut editor = Editor::new(window_rows as usize, window_cols as usize);

    if let Some(filename) = env::args().nth(1) {
        editor.open(&filename).with_context(|| format!("open {}", filename))?;
    }
    editor.set_status_message("HELP: Ctrl-S = save | Ctrl-Q = quit | Ctrl-F = find".to_owned());

    let mut stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        editor.refresh_screen(&mut stdout);
        if !editor.process_keypress(&mut stdin, &mut stdout).context("read key")? {
            break;
        }
    }
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        process::exit(1);
    }
}
