//! Scripted stand-in for the native clingo library.
//!
//! Implements every entry point of the binding table over plain Rust state,
//! with a small table of known programs, so the bridge can be driven end to
//! end without the real solver. Allocation counters make release-exactly-once
//! checks possible.

#![allow(dead_code)]
#![allow(clippy::missing_panics_doc)]

use core::ffi::{c_char, c_int, c_uint, c_void};
use std::cell::RefCell;
use std::ffi::{CStr, CString};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use rustasp::ffi;
use rustasp::Clingo;

pub static CONTROLS_ALLOCATED: AtomicUsize = AtomicUsize::new(0);
pub static CONTROLS_FREED: AtomicUsize = AtomicUsize::new(0);
pub static HANDLES_OPENED: AtomicUsize = AtomicUsize::new(0);
pub static HANDLES_CLOSED: AtomicUsize = AtomicUsize::new(0);
pub static BACKEND_BEGINS: AtomicUsize = AtomicUsize::new(0);
pub static BACKEND_ENDS: AtomicUsize = AtomicUsize::new(0);

/// Builds a bridge handle over the scripted library
pub fn fake_clingo() -> Clingo {
    Clingo::from_vtable(VTABLE)
}

// ---------------------------------------------------------------------------
// interned symbols, signatures and strings

#[derive(Debug, Clone, PartialEq, Eq)]
enum SymData {
    Num(i32),
    Str(String),
    Fun {
        name: String,
        args: Vec<u64>,
        positive: bool,
    },
}

static SYMBOLS: Mutex<Vec<SymData>> = Mutex::new(Vec::new());
static SIGNATURES: Mutex<Vec<(String, u32, bool)>> = Mutex::new(Vec::new());
static CSTRINGS: Mutex<Vec<CString>> = Mutex::new(Vec::new());

fn intern(data: SymData) -> u64 {
    let mut table = SYMBOLS.lock().unwrap();
    if let Some(idx) = table.iter().position(|entry| *entry == data) {
        return (idx + 1) as u64;
    }
    table.push(data);
    table.len() as u64
}

fn sym_data(token: u64) -> Option<SymData> {
    let table = SYMBOLS.lock().unwrap();
    table.get((token as usize).checked_sub(1)?).cloned()
}

fn intern_id(name: &str) -> u64 {
    intern(SymData::Fun {
        name: name.to_owned(),
        args: Vec::new(),
        positive: true,
    })
}

/// Returns a stable C string pointer with process lifetime
fn leak_cstr(s: &str) -> *const c_char {
    let mut table = CSTRINGS.lock().unwrap();
    if let Some(existing) = table.iter().find(|c| c.to_bytes() == s.as_bytes()) {
        return existing.as_ptr();
    }
    let owned = CString::new(s).expect("interned string contains NUL");
    let ptr = owned.as_ptr();
    table.push(owned);
    ptr
}

fn render(token: u64) -> String {
    match sym_data(token) {
        None => String::from("<invalid>"),
        Some(SymData::Num(n)) => n.to_string(),
        Some(SymData::Str(s)) => format!("\"{s}\""),
        Some(SymData::Fun {
            name,
            args,
            positive,
        }) => {
            let sign = if positive { "" } else { "-" };
            if args.is_empty() {
                format!("{sign}{name}")
            } else {
                let rendered: Vec<String> = args.iter().map(|&a| render(a)).collect();
                format!("{sign}{name}({})", rendered.join(","))
            }
        }
    }
}

// ---------------------------------------------------------------------------
// term parsing for clingo_parse_term

struct Parser<'a> {
    text: &'a [u8],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn ws(&mut self) {
        while self.pos < self.text.len() && self.text[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
    }

    fn peek(&self) -> Option<u8> {
        self.text.get(self.pos).copied()
    }

    fn ident(&mut self) -> Option<String> {
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == b'_')
        {
            self.pos += 1;
        }
        if self.pos == start {
            return None;
        }
        Some(String::from_utf8_lossy(&self.text[start..self.pos]).into_owned())
    }

    fn number(&mut self) -> Option<i32> {
        let start = self.pos;
        if self.peek() == Some(b'-') {
            self.pos += 1;
        }
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.pos += 1;
        }
        std::str::from_utf8(&self.text[start..self.pos])
            .ok()?
            .parse()
            .ok()
    }

    fn term(&mut self) -> Option<u64> {
        self.ws();
        match self.peek()? {
            b'-' | b'0'..=b'9' => Some(intern(SymData::Num(self.number()?))),
            b'"' => {
                self.pos += 1;
                let start = self.pos;
                while self.peek().is_some_and(|c| c != b'"') {
                    self.pos += 1;
                }
                if self.peek() != Some(b'"') {
                    return None;
                }
                let value = String::from_utf8_lossy(&self.text[start..self.pos]).into_owned();
                self.pos += 1;
                Some(intern(SymData::Str(value)))
            }
            c if c.is_ascii_lowercase() || c == b'_' => {
                let name = self.ident()?;
                self.ws();
                let mut args = Vec::new();
                if self.peek() == Some(b'(') {
                    self.pos += 1;
                    loop {
                        args.push(self.term()?);
                        self.ws();
                        match self.peek()? {
                            b',' => self.pos += 1,
                            b')' => {
                                self.pos += 1;
                                break;
                            }
                            _ => return None,
                        }
                    }
                }
                Some(intern(SymData::Fun {
                    name,
                    args,
                    positive: true,
                }))
            }
            _ => None,
        }
    }
}

fn parse_term_text(text: &str) -> Option<u64> {
    let mut parser = Parser {
        text: text.as_bytes(),
        pos: 0,
    };
    let token = parser.term()?;
    parser.ws();
    if parser.pos == parser.text.len() {
        Some(token)
    } else {
        None
    }
}

// ---------------------------------------------------------------------------
// thread-local error state

thread_local! {
    static LAST_ERROR: RefCell<(c_int, CString)> =
        RefCell::new((0, CString::new("").unwrap()));
}

fn set_fail(code: c_int, message: &str) -> bool {
    LAST_ERROR.with(|slot| {
        *slot.borrow_mut() = (code, CString::new(message).unwrap());
    });
    false
}

const RUNTIME: c_int = 1;
const LOGIC: c_int = 2;

// ---------------------------------------------------------------------------
// control state

struct FakeAtom {
    sym: u64,
    fact: bool,
}

struct FakeControl {
    program: String,
    conflicting: bool,
    atoms: Vec<FakeAtom>,
    models: Vec<Vec<u64>>,
    logger: (ffi::clingo_logger_t, usize),
    propagator: Option<(ffi::clingo_propagator_t, usize)>,
    watches: Vec<i32>,
    backend_open: bool,
    backend_statements: usize,
    next_backend_atom: u32,
    models_setting: String,
    last_models_found: usize,
}

unsafe fn ctl<'a>(ptr: *mut ffi::clingo_control) -> &'a mut FakeControl {
    &mut *ptr.cast::<FakeControl>()
}

unsafe fn ctl_const<'a>(ptr: *const ffi::clingo_control) -> &'a FakeControl {
    &*ptr.cast::<FakeControl>()
}

struct FakeModel {
    symbols: Vec<u64>,
    atoms: Vec<u64>,
    number: u64,
    cost: Vec<i64>,
}

struct FakeSolveHandle {
    ctl: *mut FakeControl,
    models: Vec<Vec<u64>>,
    atoms: Vec<u64>,
    next: usize,
    yielding: bool,
    event_cb: ffi::clingo_solve_event_callback_t,
    event_data: *mut c_void,
    current: Option<Box<FakeModel>>,
    finished: bool,
    stopped: bool,
    cancelled: bool,
    failed: bool,
    result_bits: u32,
    seen: usize,
}

unsafe fn hnd<'a>(ptr: *mut ffi::clingo_solve_handle) -> &'a mut FakeSolveHandle {
    &mut *ptr.cast::<FakeSolveHandle>()
}

// ---------------------------------------------------------------------------
// entry points

unsafe extern "C" fn fake_version(major: *mut c_int, minor: *mut c_int, revision: *mut c_int) {
    *major = 5;
    *minor = 6;
    *revision = 2;
}

unsafe extern "C" fn fake_error_code() -> c_int {
    LAST_ERROR.with(|slot| slot.borrow().0)
}

unsafe extern "C" fn fake_error_message() -> *const c_char {
    LAST_ERROR.with(|slot| leak_cstr(slot.borrow().1.to_str().unwrap_or("")))
}

unsafe extern "C" fn fake_set_error(code: c_int, message: *const c_char) {
    let message = if message.is_null() {
        String::new()
    } else {
        CStr::from_ptr(message).to_string_lossy().into_owned()
    };
    set_fail(code, &message);
}

unsafe extern "C" fn fake_signature_create(
    name: *const c_char,
    arity: u32,
    positive: bool,
    signature: *mut u64,
) -> bool {
    let name = CStr::from_ptr(name).to_string_lossy().into_owned();
    let mut table = SIGNATURES.lock().unwrap();
    table.push((name, arity, positive));
    *signature = table.len() as u64;
    true
}

fn signature(token: u64) -> Option<(String, u32, bool)> {
    SIGNATURES
        .lock()
        .unwrap()
        .get((token as usize).wrapping_sub(1))
        .cloned()
}

unsafe extern "C" fn fake_symbol_create_number(number: c_int, symbol: *mut u64) {
    *symbol = intern(SymData::Num(number));
}

unsafe extern "C" fn fake_symbol_create_id(
    name: *const c_char,
    positive: bool,
    symbol: *mut u64,
) -> bool {
    let name = CStr::from_ptr(name).to_string_lossy().into_owned();
    *symbol = intern(SymData::Fun {
        name,
        args: Vec::new(),
        positive,
    });
    true
}

unsafe extern "C" fn fake_symbol_create_string(string: *const c_char, symbol: *mut u64) -> bool {
    let value = CStr::from_ptr(string).to_string_lossy().into_owned();
    *symbol = intern(SymData::Str(value));
    true
}

unsafe extern "C" fn fake_symbol_create_function(
    name: *const c_char,
    arguments: *const u64,
    arguments_size: usize,
    positive: bool,
    symbol: *mut u64,
) -> bool {
    let name = CStr::from_ptr(name).to_string_lossy().into_owned();
    let args = if arguments.is_null() {
        Vec::new()
    } else {
        std::slice::from_raw_parts(arguments, arguments_size).to_vec()
    };
    *symbol = intern(SymData::Fun {
        name,
        args,
        positive,
    });
    true
}

unsafe extern "C" fn fake_symbol_number(symbol: u64, number: *mut c_int) -> bool {
    match sym_data(symbol) {
        Some(SymData::Num(n)) => {
            *number = n;
            true
        }
        _ => set_fail(RUNTIME, "symbol is not a number"),
    }
}

unsafe extern "C" fn fake_symbol_name(symbol: u64, name: *mut *const c_char) -> bool {
    match sym_data(symbol) {
        Some(SymData::Fun { name: n, .. }) => {
            *name = leak_cstr(&n);
            true
        }
        _ => set_fail(RUNTIME, "symbol is not a function"),
    }
}

unsafe extern "C" fn fake_symbol_string(symbol: u64, string: *mut *const c_char) -> bool {
    match sym_data(symbol) {
        Some(SymData::Str(s)) => {
            *string = leak_cstr(&s);
            true
        }
        _ => set_fail(RUNTIME, "symbol is not a string"),
    }
}

unsafe extern "C" fn fake_symbol_is_positive(symbol: u64, positive: *mut bool) -> bool {
    match sym_data(symbol) {
        Some(SymData::Fun { positive: p, .. }) => {
            *positive = p;
            true
        }
        _ => set_fail(RUNTIME, "symbol is not a function"),
    }
}

unsafe extern "C" fn fake_symbol_arguments(
    symbol: u64,
    arguments: *mut *const u64,
    size: *mut usize,
) -> bool {
    match sym_data(symbol) {
        Some(SymData::Fun { args, .. }) => {
            // hand out a stable copy with process lifetime
            let leaked: &'static [u64] = Vec::leak(args);
            *arguments = leaked.as_ptr();
            *size = leaked.len();
            true
        }
        _ => set_fail(RUNTIME, "symbol is not a function"),
    }
}

unsafe extern "C" fn fake_symbol_type(symbol: u64) -> c_int {
    match sym_data(symbol) {
        Some(SymData::Num(_)) => 1,
        Some(SymData::Str(_)) => 4,
        _ => 5,
    }
}

unsafe extern "C" fn fake_symbol_to_string_size(symbol: u64, size: *mut usize) -> bool {
    *size = render(symbol).len() + 1;
    true
}

unsafe extern "C" fn fake_symbol_to_string(symbol: u64, string: *mut c_char, size: usize) -> bool {
    let rendered = render(symbol);
    if size < rendered.len() + 1 {
        return set_fail(RUNTIME, "buffer too small");
    }
    std::ptr::copy_nonoverlapping(rendered.as_ptr().cast::<c_char>(), string, rendered.len());
    *string.add(rendered.len()) = 0;
    true
}

unsafe extern "C" fn fake_symbol_is_equal_to(a: u64, b: u64) -> bool {
    a == b
}

unsafe extern "C" fn fake_parse_term(
    string: *const c_char,
    _logger: ffi::clingo_logger_t,
    _logger_data: *mut c_void,
    _message_limit: c_uint,
    symbol: *mut u64,
) -> bool {
    let text = CStr::from_ptr(string).to_string_lossy().into_owned();
    match parse_term_text(&text) {
        Some(token) => {
            *symbol = token;
            true
        }
        None => set_fail(RUNTIME, "parsing failed"),
    }
}

unsafe extern "C" fn fake_control_new(
    _arguments: *const *const c_char,
    _arguments_size: usize,
    logger: ffi::clingo_logger_t,
    logger_data: *mut c_void,
    _message_limit: c_uint,
    control: *mut *mut ffi::clingo_control,
) -> bool {
    let fake = Box::new(FakeControl {
        program: String::new(),
        conflicting: false,
        atoms: Vec::new(),
        models: Vec::new(),
        logger: (logger, logger_data as usize),
        propagator: None,
        watches: Vec::new(),
        backend_open: false,
        backend_statements: 0,
        next_backend_atom: 100,
        models_setting: String::from("0"),
        last_models_found: 0,
    });
    CONTROLS_ALLOCATED.fetch_add(1, Ordering::SeqCst);
    *control = Box::into_raw(fake).cast::<ffi::clingo_control>();
    true
}

unsafe extern "C" fn fake_control_free(control: *mut ffi::clingo_control) {
    drop(Box::from_raw(control.cast::<FakeControl>()));
    CONTROLS_FREED.fetch_add(1, Ordering::SeqCst);
}

unsafe extern "C" fn fake_control_add(
    control: *mut ffi::clingo_control,
    _name: *const c_char,
    _parameters: *const *const c_char,
    _parameters_size: usize,
    program: *const c_char,
) -> bool {
    let program = CStr::from_ptr(program).to_string_lossy().into_owned();
    if program.contains("syntax error") {
        return set_fail(RUNTIME, "parse error: syntax error at line 1");
    }
    let fake = ctl(control);
    fake.program.push_str(&program);
    fake.program.push('\n');
    true
}

unsafe extern "C" fn fake_symbol_collector(
    symbols: *const u64,
    size: usize,
    data: *mut c_void,
) -> bool {
    let sink = &mut *data.cast::<Vec<u64>>();
    sink.extend_from_slice(std::slice::from_raw_parts(symbols, size));
    true
}

unsafe extern "C" fn fake_control_ground(
    control: *mut ffi::clingo_control,
    _parts: *const ffi::clingo_part_t,
    _parts_size: usize,
    ground_callback: ffi::clingo_ground_callback_t,
    ground_callback_data: *mut c_void,
) -> bool {
    let fake = ctl(control);
    fake.atoms.clear();
    fake.models.clear();
    fake.conflicting = false;
    let program = fake.program.clone();

    if program.contains("undefined") {
        if let (Some(logger), data) = fake.logger {
            let message = leak_cstr("atom does not occur in any rule head");
            logger(2, message, data as *mut c_void);
        }
    }

    if program.contains("a. not a.") {
        fake.conflicting = true;
        return true;
    }

    if program.contains('@') {
        // every external function term is evaluated through the callback and
        // its replacement symbols become facts
        let Some(callback) = ground_callback else {
            return true;
        };
        let mut facts: Vec<u64> = Vec::new();
        let mut rest = program.as_str();
        while let Some(at) = rest.find('@') {
            rest = &rest[at + 1..];
            let end = rest
                .find(|c: char| !c.is_ascii_alphanumeric() && c != '_')
                .unwrap_or(rest.len());
            let name = CString::new(&rest[..end]).unwrap();
            let mut returned: Vec<u64> = Vec::new();
            let ok = callback(
                std::ptr::null(),
                name.as_ptr(),
                std::ptr::null(),
                0,
                ground_callback_data,
                Some(fake_symbol_collector),
                std::ptr::from_mut(&mut returned).cast::<c_void>(),
            );
            if !ok {
                return false;
            }
            facts.extend(returned);
        }
        fake.atoms = facts.iter().map(|&sym| FakeAtom { sym, fact: true }).collect();
        fake.models = vec![facts];
        return true;
    }

    if program.contains("1 {a; b} 1") {
        let a = intern_id("a");
        let b = intern_id("b");
        let c = intern_id("c");
        fake.atoms = vec![
            FakeAtom { sym: a, fact: false },
            FakeAtom { sym: b, fact: false },
            FakeAtom { sym: c, fact: true },
        ];
        fake.models = vec![vec![a, c], vec![b, c]];
        return true;
    }

    // remaining programs are treated as plain conjunctions of facts
    let mut facts: Vec<u64> = Vec::new();
    for stmt in program.split('.') {
        let stmt = stmt.trim();
        if stmt.is_empty() || stmt == "undefined" {
            continue;
        }
        if let Some(token) = parse_term_text(stmt) {
            facts.push(token);
        }
    }
    fake.atoms = facts.iter().map(|&sym| FakeAtom { sym, fact: true }).collect();
    fake.models = vec![facts];
    true
}

static FAKE_ASSIGNMENT: u8 = 0;

unsafe fn run_propagator(fake: *mut FakeControl) -> bool {
    let Some((prop, data)) = (*fake).propagator else {
        return true;
    };
    let data = data as *mut c_void;
    let init_ptr = fake.cast::<ffi::clingo_propagate_init>();
    if let Some(init) = prop.init {
        if !init(init_ptr, data) {
            return false;
        }
    }
    let pc_ptr = fake.cast::<ffi::clingo_propagate_control>();
    let changes: [i32; 1] = [1];
    if !(*fake).atoms.is_empty() {
        if let Some(propagate) = prop.propagate {
            if !propagate(pc_ptr, changes.as_ptr(), changes.len(), data) {
                return false;
            }
        }
        if let Some(check) = prop.check {
            if !check(pc_ptr, data) {
                return false;
            }
        }
        if let Some(undo) = prop.undo {
            undo(pc_ptr.cast_const(), changes.as_ptr(), changes.len(), data);
        }
    }
    true
}

unsafe extern "C" fn fake_control_solve(
    control: *mut ffi::clingo_control,
    mode: c_uint,
    _assumptions: *const i32,
    _assumptions_size: usize,
    notify: ffi::clingo_solve_event_callback_t,
    data: *mut c_void,
    handle: *mut *mut ffi::clingo_solve_handle,
) -> bool {
    let propagator_ok = run_propagator(control.cast::<FakeControl>());
    let fake = ctl(control);
    let atoms: Vec<u64> = fake.atoms.iter().map(|a| a.sym).collect();
    let fake_handle = Box::new(FakeSolveHandle {
        ctl: std::ptr::from_mut(fake),
        models: fake.models.clone(),
        atoms,
        next: 0,
        yielding: mode & 2 != 0,
        event_cb: notify,
        event_data: data,
        current: None,
        finished: false,
        stopped: false,
        cancelled: false,
        failed: !propagator_ok,
        result_bits: 0,
        seen: 0,
    });
    HANDLES_OPENED.fetch_add(1, Ordering::SeqCst);
    *handle = Box::into_raw(fake_handle).cast::<ffi::clingo_solve_handle>();
    true
}

unsafe fn fire_model_event(handle: &mut FakeSolveHandle) -> bool {
    // returns false if enumeration should stop (failure or goon=false)
    let model_ptr = handle
        .current
        .as_mut()
        .map_or(std::ptr::null_mut(), |model| {
            std::ptr::from_mut(model.as_mut()).cast::<c_void>()
        });
    let Some(cb) = handle.event_cb else {
        return true;
    };
    let mut goon = true;
    if !cb(0, model_ptr, handle.event_data, &mut goon) {
        handle.failed = true;
        return false;
    }
    if !goon {
        handle.stopped = true;
        return false;
    }
    true
}

unsafe fn fire_finish_events(handle: &mut FakeSolveHandle) -> bool {
    let bits = compute_result(handle);
    handle.result_bits = bits;
    handle.finished = true;
    (*handle.ctl).last_models_found = handle.seen;
    let Some(cb) = handle.event_cb else {
        return true;
    };
    let mut goon = true;
    let ctl_ptr = handle.ctl;
    let mut stats_payload: [*mut ffi::clingo_statistics; 2] = [
        ctl_ptr.cast::<ffi::clingo_statistics>(),
        ctl_ptr.cast::<ffi::clingo_statistics>(),
    ];
    if !cb(
        2,
        std::ptr::from_mut(&mut stats_payload).cast::<c_void>(),
        handle.event_data,
        &mut goon,
    ) {
        handle.failed = true;
        return false;
    }
    let mut bits_payload: c_uint = bits;
    if !cb(
        3,
        std::ptr::from_mut(&mut bits_payload).cast::<c_void>(),
        handle.event_data,
        &mut goon,
    ) {
        handle.failed = true;
        return false;
    }
    true
}

fn compute_result(handle: &FakeSolveHandle) -> u32 {
    let mut bits = 0;
    if handle.cancelled {
        bits |= 8;
        if handle.seen > 0 {
            bits |= 1;
        }
        return bits;
    }
    if handle.stopped {
        return 1;
    }
    if handle.models.is_empty() {
        2 | 4
    } else {
        1 | 4
    }
}

unsafe fn advance(handle: &mut FakeSolveHandle) -> bool {
    if handle.finished || handle.failed {
        return true;
    }
    if handle.cancelled || handle.stopped || handle.next >= handle.models.len() {
        handle.current = None;
        return fire_finish_events(handle);
    }
    let symbols = handle.models[handle.next].clone();
    handle.next += 1;
    handle.seen += 1;
    handle.current = Some(Box::new(FakeModel {
        symbols,
        atoms: handle.atoms.clone(),
        number: handle.seen as u64,
        cost: Vec::new(),
    }));
    if !fire_model_event(handle) {
        if handle.failed {
            return false;
        }
        // enumeration stopped by the handler
        handle.current = None;
    }
    true
}

unsafe extern "C" fn fake_solve_handle_get(
    handle: *mut ffi::clingo_solve_handle,
    result: *mut c_uint,
) -> bool {
    let handle = hnd(handle);
    if handle.failed {
        return false;
    }
    // drains whatever the caller has not stepped through yet
    while !handle.finished {
        if !advance(handle) {
            return false;
        }
    }
    *result = handle.result_bits;
    true
}

unsafe extern "C" fn fake_solve_handle_wait(
    _handle: *mut ffi::clingo_solve_handle,
    _timeout: f64,
    result: *mut bool,
) {
    *result = true;
}

unsafe extern "C" fn fake_solve_handle_model(
    handle: *mut ffi::clingo_solve_handle,
    model: *mut *const ffi::clingo_model,
) -> bool {
    let handle = hnd(handle);
    if handle.failed {
        return false;
    }
    *model = handle
        .current
        .as_ref()
        .map_or(std::ptr::null(), |current| {
            std::ptr::from_ref(current.as_ref()).cast::<ffi::clingo_model>()
        });
    true
}

unsafe extern "C" fn fake_solve_handle_resume(handle: *mut ffi::clingo_solve_handle) -> bool {
    let handle = hnd(handle);
    if handle.failed {
        return false;
    }
    advance(handle)
}

unsafe extern "C" fn fake_solve_handle_cancel(handle: *mut ffi::clingo_solve_handle) -> bool {
    let handle = hnd(handle);
    handle.cancelled = true;
    true
}

unsafe extern "C" fn fake_solve_handle_close(handle: *mut ffi::clingo_solve_handle) -> bool {
    drop(Box::from_raw(handle.cast::<FakeSolveHandle>()));
    HANDLES_CLOSED.fetch_add(1, Ordering::SeqCst);
    true
}

unsafe extern "C" fn fake_control_is_conflicting(control: *const ffi::clingo_control) -> bool {
    ctl_const(control).conflicting
}

unsafe extern "C" fn fake_control_interrupt(_control: *mut ffi::clingo_control) {}

unsafe extern "C" fn fake_control_symbolic_atoms(
    control: *const ffi::clingo_control,
    atoms: *mut *const ffi::clingo_symbolic_atoms,
) -> bool {
    *atoms = control.cast::<ffi::clingo_symbolic_atoms>();
    true
}

unsafe extern "C" fn fake_control_backend(
    control: *mut ffi::clingo_control,
    backend: *mut *mut ffi::clingo_backend,
) -> bool {
    *backend = control.cast::<ffi::clingo_backend>();
    true
}

unsafe extern "C" fn fake_control_configuration(
    control: *mut ffi::clingo_control,
    configuration: *mut *mut ffi::clingo_configuration,
) -> bool {
    *configuration = control.cast::<ffi::clingo_configuration>();
    true
}

unsafe extern "C" fn fake_control_statistics(
    control: *const ffi::clingo_control,
    statistics: *mut *const ffi::clingo_statistics,
) -> bool {
    *statistics = control.cast::<ffi::clingo_statistics>();
    true
}

unsafe extern "C" fn fake_control_register_propagator(
    control: *mut ffi::clingo_control,
    propagator: *const ffi::clingo_propagator_t,
    data: *mut c_void,
    _sequential: bool,
) -> bool {
    ctl(control).propagator = Some((*propagator, data as usize));
    true
}

// --- backend -----------------------------------------------------------------

unsafe fn backend_ctl<'a>(ptr: *mut ffi::clingo_backend) -> &'a mut FakeControl {
    &mut *ptr.cast::<FakeControl>()
}

unsafe extern "C" fn fake_backend_begin(backend: *mut ffi::clingo_backend) -> bool {
    let fake = backend_ctl(backend);
    if fake.backend_open {
        return set_fail(LOGIC, "backend already open");
    }
    fake.backend_open = true;
    BACKEND_BEGINS.fetch_add(1, Ordering::SeqCst);
    true
}

unsafe extern "C" fn fake_backend_end(backend: *mut ffi::clingo_backend) -> bool {
    let fake = backend_ctl(backend);
    if !fake.backend_open {
        return set_fail(LOGIC, "backend not open");
    }
    fake.backend_open = false;
    BACKEND_ENDS.fetch_add(1, Ordering::SeqCst);
    true
}

unsafe fn backend_statement(backend: *mut ffi::clingo_backend) -> bool {
    let fake = backend_ctl(backend);
    if !fake.backend_open {
        return set_fail(LOGIC, "statement outside backend bracket");
    }
    fake.backend_statements += 1;
    true
}

unsafe extern "C" fn fake_backend_rule(
    backend: *mut ffi::clingo_backend,
    _choice: bool,
    _head: *const u32,
    _head_size: usize,
    _body: *const i32,
    _body_size: usize,
) -> bool {
    backend_statement(backend)
}

unsafe extern "C" fn fake_backend_weight_rule(
    backend: *mut ffi::clingo_backend,
    _choice: bool,
    _head: *const u32,
    _head_size: usize,
    _lower_bound: i32,
    _body: *const ffi::clingo_weighted_literal_t,
    _body_size: usize,
) -> bool {
    backend_statement(backend)
}

unsafe extern "C" fn fake_backend_minimize(
    backend: *mut ffi::clingo_backend,
    _priority: i32,
    _literals: *const ffi::clingo_weighted_literal_t,
    _size: usize,
) -> bool {
    backend_statement(backend)
}

unsafe extern "C" fn fake_backend_project(
    backend: *mut ffi::clingo_backend,
    _atoms: *const u32,
    _size: usize,
) -> bool {
    backend_statement(backend)
}

unsafe extern "C" fn fake_backend_external(
    backend: *mut ffi::clingo_backend,
    _atom: u32,
    _external_type: c_int,
) -> bool {
    backend_statement(backend)
}

unsafe extern "C" fn fake_backend_assume(
    backend: *mut ffi::clingo_backend,
    _literals: *const i32,
    _size: usize,
) -> bool {
    backend_statement(backend)
}

unsafe extern "C" fn fake_backend_heuristic(
    backend: *mut ffi::clingo_backend,
    _atom: u32,
    _heuristic_type: c_int,
    _bias: c_int,
    _priority: c_uint,
    _condition: *const i32,
    _size: usize,
) -> bool {
    backend_statement(backend)
}

unsafe extern "C" fn fake_backend_acyc_edge(
    backend: *mut ffi::clingo_backend,
    _node_u: c_int,
    _node_v: c_int,
    _condition: *const i32,
    _size: usize,
) -> bool {
    backend_statement(backend)
}

unsafe extern "C" fn fake_backend_add_atom(
    backend: *mut ffi::clingo_backend,
    _symbol: *mut u64,
    atom: *mut u32,
) -> bool {
    let fake = backend_ctl(backend);
    if !fake.backend_open {
        return set_fail(LOGIC, "statement outside backend bracket");
    }
    fake.next_backend_atom += 1;
    *atom = fake.next_backend_atom;
    true
}

// --- model -------------------------------------------------------------------

unsafe fn model<'a>(ptr: *const ffi::clingo_model) -> &'a FakeModel {
    &*ptr.cast::<FakeModel>()
}

unsafe extern "C" fn fake_model_type(_model: *const ffi::clingo_model, tpe: *mut c_int) -> bool {
    *tpe = 0;
    true
}

unsafe extern "C" fn fake_model_number(ptr: *const ffi::clingo_model, number: *mut u64) -> bool {
    *number = model(ptr).number;
    true
}

unsafe extern "C" fn fake_model_symbols_size(
    ptr: *const ffi::clingo_model,
    _show: c_uint,
    size: *mut usize,
) -> bool {
    *size = model(ptr).symbols.len();
    true
}

unsafe extern "C" fn fake_model_symbols(
    ptr: *const ffi::clingo_model,
    _show: c_uint,
    symbols: *mut u64,
    size: usize,
) -> bool {
    let data = &model(ptr).symbols;
    if size < data.len() {
        return set_fail(RUNTIME, "buffer too small");
    }
    std::ptr::copy_nonoverlapping(data.as_ptr(), symbols, data.len());
    true
}

unsafe extern "C" fn fake_model_contains(
    ptr: *const ffi::clingo_model,
    atom: u64,
    contained: *mut bool,
) -> bool {
    *contained = model(ptr).symbols.contains(&atom);
    true
}

unsafe extern "C" fn fake_model_is_true(
    ptr: *const ffi::clingo_model,
    literal: i32,
    result: *mut bool,
) -> bool {
    let fake = model(ptr);
    let idx = literal.unsigned_abs() as usize;
    if idx == 0 || idx > fake.atoms.len() {
        return set_fail(LOGIC, "invalid literal");
    }
    let truth = fake.symbols.contains(&fake.atoms[idx - 1]);
    *result = if literal > 0 { truth } else { !truth };
    true
}

unsafe extern "C" fn fake_model_cost_size(ptr: *const ffi::clingo_model, size: *mut usize) -> bool {
    *size = model(ptr).cost.len();
    true
}

unsafe extern "C" fn fake_model_cost(
    ptr: *const ffi::clingo_model,
    costs: *mut i64,
    size: usize,
) -> bool {
    let data = &model(ptr).cost;
    if size < data.len() {
        return set_fail(RUNTIME, "buffer too small");
    }
    std::ptr::copy_nonoverlapping(data.as_ptr(), costs, data.len());
    true
}

unsafe extern "C" fn fake_model_optimality_proven(
    _model: *const ffi::clingo_model,
    proven: *mut bool,
) -> bool {
    *proven = false;
    true
}

// --- configuration -----------------------------------------------------------

const CONF_ROOT: u32 = 0;
const CONF_SOLVE: u32 = 1;
const CONF_MODELS: u32 = 2;

unsafe fn conf_ctl<'a>(ptr: *mut ffi::clingo_configuration) -> &'a mut FakeControl {
    &mut *ptr.cast::<FakeControl>()
}

unsafe extern "C" fn fake_configuration_root(
    _conf: *mut ffi::clingo_configuration,
    key: *mut u32,
) -> bool {
    *key = CONF_ROOT;
    true
}

unsafe extern "C" fn fake_configuration_type(
    _conf: *mut ffi::clingo_configuration,
    key: u32,
    tpe: *mut c_uint,
) -> bool {
    *tpe = match key {
        CONF_ROOT | CONF_SOLVE => 4,
        CONF_MODELS => 1,
        _ => return set_fail(RUNTIME, "unknown configuration key"),
    };
    true
}

unsafe extern "C" fn fake_configuration_array_size(
    _conf: *mut ffi::clingo_configuration,
    _key: u32,
    _size: *mut usize,
) -> bool {
    set_fail(RUNTIME, "entry is not an array")
}

unsafe extern "C" fn fake_configuration_array_at(
    _conf: *mut ffi::clingo_configuration,
    _key: u32,
    _offset: usize,
    _subkey: *mut u32,
) -> bool {
    set_fail(RUNTIME, "entry is not an array")
}

unsafe extern "C" fn fake_configuration_map_size(
    _conf: *mut ffi::clingo_configuration,
    key: u32,
    size: *mut usize,
) -> bool {
    match key {
        CONF_ROOT | CONF_SOLVE => {
            *size = 1;
            true
        }
        _ => set_fail(RUNTIME, "entry is not a map"),
    }
}

unsafe extern "C" fn fake_configuration_map_subkey_name(
    _conf: *mut ffi::clingo_configuration,
    key: u32,
    offset: usize,
    name: *mut *const c_char,
) -> bool {
    if offset != 0 {
        return set_fail(RUNTIME, "offset out of range");
    }
    match key {
        CONF_ROOT => {
            *name = leak_cstr("solve");
            true
        }
        CONF_SOLVE => {
            *name = leak_cstr("models");
            true
        }
        _ => set_fail(RUNTIME, "entry is not a map"),
    }
}

unsafe extern "C" fn fake_configuration_map_at(
    _conf: *mut ffi::clingo_configuration,
    key: u32,
    name: *const c_char,
    subkey: *mut u32,
) -> bool {
    let name = CStr::from_ptr(name).to_string_lossy();
    match (key, name.as_ref()) {
        (CONF_ROOT, "solve") => {
            *subkey = CONF_SOLVE;
            true
        }
        (CONF_SOLVE, "models") => {
            *subkey = CONF_MODELS;
            true
        }
        _ => set_fail(RUNTIME, "unknown configuration key"),
    }
}

unsafe extern "C" fn fake_configuration_value_get_size(
    conf: *mut ffi::clingo_configuration,
    key: u32,
    size: *mut usize,
) -> bool {
    if key != CONF_MODELS {
        return set_fail(RUNTIME, "entry is not a value");
    }
    *size = conf_ctl(conf).models_setting.len() + 1;
    true
}

unsafe extern "C" fn fake_configuration_value_get(
    conf: *mut ffi::clingo_configuration,
    key: u32,
    value: *mut c_char,
    size: usize,
) -> bool {
    if key != CONF_MODELS {
        return set_fail(RUNTIME, "entry is not a value");
    }
    let setting = conf_ctl(conf).models_setting.clone();
    if size < setting.len() + 1 {
        return set_fail(RUNTIME, "buffer too small");
    }
    std::ptr::copy_nonoverlapping(setting.as_ptr().cast::<c_char>(), value, setting.len());
    *value.add(setting.len()) = 0;
    true
}

unsafe extern "C" fn fake_configuration_value_set(
    conf: *mut ffi::clingo_configuration,
    key: u32,
    value: *const c_char,
) -> bool {
    if key != CONF_MODELS {
        return set_fail(RUNTIME, "entry is not a value");
    }
    conf_ctl(conf).models_setting = CStr::from_ptr(value).to_string_lossy().into_owned();
    true
}

// --- statistics --------------------------------------------------------------

const STAT_ROOT: u64 = 0;
const STAT_MODELS: u64 = 1;

unsafe fn stat_ctl<'a>(ptr: *const ffi::clingo_statistics) -> &'a FakeControl {
    &*ptr.cast::<FakeControl>()
}

unsafe extern "C" fn fake_statistics_root(
    _stats: *const ffi::clingo_statistics,
    key: *mut u64,
) -> bool {
    *key = STAT_ROOT;
    true
}

unsafe extern "C" fn fake_statistics_type(
    _stats: *const ffi::clingo_statistics,
    key: u64,
    tpe: *mut c_int,
) -> bool {
    *tpe = match key {
        STAT_ROOT => 3,
        STAT_MODELS => 1,
        _ => return set_fail(RUNTIME, "unknown statistics key"),
    };
    true
}

unsafe extern "C" fn fake_statistics_value_get(
    stats: *const ffi::clingo_statistics,
    key: u64,
    value: *mut f64,
) -> bool {
    if key != STAT_MODELS {
        return set_fail(RUNTIME, "entry is not a value");
    }
    #[allow(clippy::cast_precision_loss)]
    {
        *value = stat_ctl(stats).last_models_found as f64;
    }
    true
}

unsafe extern "C" fn fake_statistics_array_size(
    _stats: *const ffi::clingo_statistics,
    _key: u64,
    _size: *mut usize,
) -> bool {
    set_fail(RUNTIME, "entry is not an array")
}

unsafe extern "C" fn fake_statistics_array_at(
    _stats: *const ffi::clingo_statistics,
    _key: u64,
    _offset: usize,
    _subkey: *mut u64,
) -> bool {
    set_fail(RUNTIME, "entry is not an array")
}

unsafe extern "C" fn fake_statistics_map_size(
    _stats: *const ffi::clingo_statistics,
    key: u64,
    size: *mut usize,
) -> bool {
    if key != STAT_ROOT {
        return set_fail(RUNTIME, "entry is not a map");
    }
    *size = 1;
    true
}

unsafe extern "C" fn fake_statistics_map_subkey_name(
    _stats: *const ffi::clingo_statistics,
    key: u64,
    offset: usize,
    name: *mut *const c_char,
) -> bool {
    if key != STAT_ROOT || offset != 0 {
        return set_fail(RUNTIME, "offset out of range");
    }
    *name = leak_cstr("models");
    true
}

unsafe extern "C" fn fake_statistics_map_at(
    _stats: *const ffi::clingo_statistics,
    key: u64,
    name: *const c_char,
    subkey: *mut u64,
) -> bool {
    let name = CStr::from_ptr(name).to_string_lossy();
    if key == STAT_ROOT && name == "models" {
        *subkey = STAT_MODELS;
        return true;
    }
    set_fail(RUNTIME, "unknown statistics key")
}

// --- symbolic atoms ----------------------------------------------------------

unsafe fn atoms_ctl<'a>(ptr: *const ffi::clingo_symbolic_atoms) -> &'a FakeControl {
    &*ptr.cast::<FakeControl>()
}

fn iter_pack(sig: u64, idx: usize) -> u64 {
    (sig << 32) | idx as u64
}

fn iter_sig(it: u64) -> u64 {
    it >> 32
}

fn iter_idx(it: u64) -> usize {
    (it & 0xffff_ffff) as usize
}

fn sig_matches(sig: u64, sym: u64) -> bool {
    if sig == 0 {
        return true;
    }
    let Some((name, arity, _)) = signature(sig) else {
        return false;
    };
    matches!(
        sym_data(sym),
        Some(SymData::Fun { name: n, args, .. }) if n == name && args.len() as u32 == arity
    )
}

fn skip_to_match(fake: &FakeControl, sig: u64, mut idx: usize) -> usize {
    while idx < fake.atoms.len() && !sig_matches(sig, fake.atoms[idx].sym) {
        idx += 1;
    }
    idx
}

unsafe extern "C" fn fake_symbolic_atoms_size(
    atoms: *const ffi::clingo_symbolic_atoms,
    size: *mut usize,
) -> bool {
    *size = atoms_ctl(atoms).atoms.len();
    true
}

unsafe extern "C" fn fake_symbolic_atoms_begin(
    atoms: *const ffi::clingo_symbolic_atoms,
    signature: *const u64,
    iterator: *mut u64,
) -> bool {
    let fake = atoms_ctl(atoms);
    let sig = if signature.is_null() { 0 } else { *signature };
    *iterator = iter_pack(sig, skip_to_match(fake, sig, 0));
    true
}

unsafe extern "C" fn fake_symbolic_atoms_end(
    atoms: *const ffi::clingo_symbolic_atoms,
    iterator: *mut u64,
) -> bool {
    *iterator = iter_pack(0, atoms_ctl(atoms).atoms.len());
    true
}

unsafe extern "C" fn fake_symbolic_atoms_next(
    atoms: *const ffi::clingo_symbolic_atoms,
    iterator: u64,
    next: *mut u64,
) -> bool {
    let fake = atoms_ctl(atoms);
    let sig = iter_sig(iterator);
    *next = iter_pack(sig, skip_to_match(fake, sig, iter_idx(iterator) + 1));
    true
}

unsafe extern "C" fn fake_symbolic_atoms_is_valid(
    atoms: *const ffi::clingo_symbolic_atoms,
    iterator: u64,
    valid: *mut bool,
) -> bool {
    *valid = iter_idx(iterator) < atoms_ctl(atoms).atoms.len();
    true
}

unsafe extern "C" fn fake_symbolic_atoms_iterator_is_equal_to(
    _atoms: *const ffi::clingo_symbolic_atoms,
    a: u64,
    b: u64,
    equal: *mut bool,
) -> bool {
    *equal = iter_idx(a) == iter_idx(b);
    true
}

unsafe extern "C" fn fake_symbolic_atoms_symbol(
    atoms: *const ffi::clingo_symbolic_atoms,
    iterator: u64,
    symbol: *mut u64,
) -> bool {
    let fake = atoms_ctl(atoms);
    match fake.atoms.get(iter_idx(iterator)) {
        Some(atom) => {
            *symbol = atom.sym;
            true
        }
        None => set_fail(LOGIC, "iterator out of range"),
    }
}

unsafe extern "C" fn fake_symbolic_atoms_is_fact(
    atoms: *const ffi::clingo_symbolic_atoms,
    iterator: u64,
    fact: *mut bool,
) -> bool {
    let fake = atoms_ctl(atoms);
    match fake.atoms.get(iter_idx(iterator)) {
        Some(atom) => {
            *fact = atom.fact;
            true
        }
        None => set_fail(LOGIC, "iterator out of range"),
    }
}

unsafe extern "C" fn fake_symbolic_atoms_literal(
    atoms: *const ffi::clingo_symbolic_atoms,
    iterator: u64,
    literal: *mut i32,
) -> bool {
    let fake = atoms_ctl(atoms);
    let idx = iter_idx(iterator);
    if idx >= fake.atoms.len() {
        return set_fail(LOGIC, "iterator out of range");
    }
    *literal = i32::try_from(idx + 1).unwrap();
    true
}

// --- propagator objects ------------------------------------------------------

unsafe fn init_ctl<'a>(ptr: *const ffi::clingo_propagate_init) -> &'a mut FakeControl {
    &mut *ptr.cast::<FakeControl>().cast_mut()
}

unsafe extern "C" fn fake_propagate_init_solver_literal(
    _init: *const ffi::clingo_propagate_init,
    aspif_literal: i32,
    solver_literal: *mut i32,
) -> bool {
    if aspif_literal == 0 {
        return set_fail(LOGIC, "invalid literal");
    }
    *solver_literal = aspif_literal;
    true
}

unsafe extern "C" fn fake_propagate_init_add_watch(
    init: *mut ffi::clingo_propagate_init,
    solver_literal: i32,
) -> bool {
    if solver_literal == 0 {
        return set_fail(LOGIC, "invalid literal");
    }
    init_ctl(init).watches.push(solver_literal);
    true
}

unsafe extern "C" fn fake_propagate_init_add_clause(
    _init: *mut ffi::clingo_propagate_init,
    _clause: *const i32,
    _size: usize,
    result: *mut bool,
) -> bool {
    *result = true;
    true
}

unsafe extern "C" fn fake_propagate_init_number_of_threads(
    _init: *const ffi::clingo_propagate_init,
) -> c_int {
    1
}

unsafe extern "C" fn fake_propagate_control_thread_id(
    _control: *const ffi::clingo_propagate_control,
) -> u32 {
    0
}

unsafe extern "C" fn fake_propagate_control_assignment(
    _control: *const ffi::clingo_propagate_control,
) -> *const ffi::clingo_assignment {
    std::ptr::addr_of!(FAKE_ASSIGNMENT).cast::<ffi::clingo_assignment>()
}

unsafe extern "C" fn fake_propagate_control_add_clause(
    _control: *mut ffi::clingo_propagate_control,
    _clause: *const i32,
    _size: usize,
    _clause_type: c_int,
    result: *mut bool,
) -> bool {
    *result = true;
    true
}

unsafe extern "C" fn fake_propagate_control_propagate(
    _control: *mut ffi::clingo_propagate_control,
    result: *mut bool,
) -> bool {
    *result = true;
    true
}

unsafe extern "C" fn fake_assignment_decision_level(
    _assignment: *const ffi::clingo_assignment,
) -> u32 {
    0
}

unsafe extern "C" fn fake_assignment_has_conflict(
    _assignment: *const ffi::clingo_assignment,
) -> bool {
    false
}

unsafe extern "C" fn fake_assignment_truth_value(
    _assignment: *const ffi::clingo_assignment,
    literal: i32,
    value: *mut c_int,
) -> bool {
    if literal == 0 {
        return set_fail(LOGIC, "invalid literal");
    }
    *value = 0;
    true
}

pub const VTABLE: ffi::Vtable = ffi::Vtable {
    version: fake_version,
    error_code: fake_error_code,
    error_message: fake_error_message,
    set_error: fake_set_error,
    signature_create: fake_signature_create,
    symbol_create_number: fake_symbol_create_number,
    symbol_create_id: fake_symbol_create_id,
    symbol_create_string: fake_symbol_create_string,
    symbol_create_function: fake_symbol_create_function,
    symbol_number: fake_symbol_number,
    symbol_name: fake_symbol_name,
    symbol_string: fake_symbol_string,
    symbol_is_positive: fake_symbol_is_positive,
    symbol_arguments: fake_symbol_arguments,
    symbol_type: fake_symbol_type,
    symbol_to_string_size: fake_symbol_to_string_size,
    symbol_to_string: fake_symbol_to_string,
    symbol_is_equal_to: fake_symbol_is_equal_to,
    parse_term: fake_parse_term,
    control_new: fake_control_new,
    control_free: fake_control_free,
    control_add: fake_control_add,
    control_ground: fake_control_ground,
    control_solve: fake_control_solve,
    control_is_conflicting: fake_control_is_conflicting,
    control_interrupt: fake_control_interrupt,
    control_symbolic_atoms: fake_control_symbolic_atoms,
    control_backend: fake_control_backend,
    control_configuration: fake_control_configuration,
    control_statistics: fake_control_statistics,
    control_register_propagator: fake_control_register_propagator,
    solve_handle_get: fake_solve_handle_get,
    solve_handle_wait: fake_solve_handle_wait,
    solve_handle_model: fake_solve_handle_model,
    solve_handle_resume: fake_solve_handle_resume,
    solve_handle_cancel: fake_solve_handle_cancel,
    solve_handle_close: fake_solve_handle_close,
    model_type: fake_model_type,
    model_number: fake_model_number,
    model_symbols_size: fake_model_symbols_size,
    model_symbols: fake_model_symbols,
    model_contains: fake_model_contains,
    model_is_true: fake_model_is_true,
    model_cost_size: fake_model_cost_size,
    model_cost: fake_model_cost,
    model_optimality_proven: fake_model_optimality_proven,
    backend_begin: fake_backend_begin,
    backend_end: fake_backend_end,
    backend_rule: fake_backend_rule,
    backend_weight_rule: fake_backend_weight_rule,
    backend_minimize: fake_backend_minimize,
    backend_project: fake_backend_project,
    backend_external: fake_backend_external,
    backend_assume: fake_backend_assume,
    backend_heuristic: fake_backend_heuristic,
    backend_acyc_edge: fake_backend_acyc_edge,
    backend_add_atom: fake_backend_add_atom,
    configuration_root: fake_configuration_root,
    configuration_type: fake_configuration_type,
    configuration_array_size: fake_configuration_array_size,
    configuration_array_at: fake_configuration_array_at,
    configuration_map_size: fake_configuration_map_size,
    configuration_map_subkey_name: fake_configuration_map_subkey_name,
    configuration_map_at: fake_configuration_map_at,
    configuration_value_get_size: fake_configuration_value_get_size,
    configuration_value_get: fake_configuration_value_get,
    configuration_value_set: fake_configuration_value_set,
    statistics_root: fake_statistics_root,
    statistics_type: fake_statistics_type,
    statistics_value_get: fake_statistics_value_get,
    statistics_array_size: fake_statistics_array_size,
    statistics_array_at: fake_statistics_array_at,
    statistics_map_size: fake_statistics_map_size,
    statistics_map_subkey_name: fake_statistics_map_subkey_name,
    statistics_map_at: fake_statistics_map_at,
    symbolic_atoms_size: fake_symbolic_atoms_size,
    symbolic_atoms_begin: fake_symbolic_atoms_begin,
    symbolic_atoms_end: fake_symbolic_atoms_end,
    symbolic_atoms_next: fake_symbolic_atoms_next,
    symbolic_atoms_is_valid: fake_symbolic_atoms_is_valid,
    symbolic_atoms_iterator_is_equal_to: fake_symbolic_atoms_iterator_is_equal_to,
    symbolic_atoms_symbol: fake_symbolic_atoms_symbol,
    symbolic_atoms_is_fact: fake_symbolic_atoms_is_fact,
    symbolic_atoms_literal: fake_symbolic_atoms_literal,
    propagate_init_solver_literal: fake_propagate_init_solver_literal,
    propagate_init_add_watch: fake_propagate_init_add_watch,
    propagate_init_add_clause: fake_propagate_init_add_clause,
    propagate_init_number_of_threads: fake_propagate_init_number_of_threads,
    propagate_control_thread_id: fake_propagate_control_thread_id,
    propagate_control_assignment: fake_propagate_control_assignment,
    propagate_control_add_clause: fake_propagate_control_add_clause,
    propagate_control_propagate: fake_propagate_control_propagate,
    assignment_decision_level: fake_assignment_decision_level,
    assignment_has_conflict: fake_assignment_has_conflict,
    assignment_truth_value: fake_assignment_truth_value,
};
