use baya::mach::{compile, Opcode, SLOT};

const EVERYTHING: &str = "\
: top
x = 3
x += -1
y = random 200
z ^= x
if x == y then print x
if x >= y then goto top
if x != 4 then clear 2
key down then color 14
sprite pic
sprite 0
data
: pic
xxxxxxxx
x......x
x......x
xxxxxxxx
";

#[test]
fn test_code_bytes_decode_to_what_was_written() {
    let program = compile(EVERYTHING).unwrap();
    let ops = program.decode().unwrap();
    assert_eq!(ops.len() * SLOT, program.code_len());
    for (op, bytes) in ops.iter().zip(program.memory().chunks_exact(SLOT)) {
        assert_eq!(&op.encode()[..], bytes);
        assert_eq!(Opcode::decode(bytes), Ok(*op));
    }
    assert_eq!(ops.last(), Some(&Opcode::Halt));
}

#[test]
fn test_every_slot_is_aligned() {
    let program = compile(EVERYTHING).unwrap();
    assert_eq!(program.len() % SLOT, 0);
    for op in program.decode().unwrap() {
        if let Some(addr) = op.address() {
            assert_eq!(addr as usize % SLOT, 0);
            assert!((addr as usize) < program.len());
        }
    }
}

#[test]
fn test_listing() {
    let listing = compile(EVERYTHING).unwrap().to_string();
    let expected = [
        ": top",
        "0000  SET(x, 3)",
        "0004  ADD(x, 255)",
        "0008  RANDOM(y, 200)",
        "0012  ASSIGN(z ^= x)",
        "0016  IF(x == y)",
        "0020  PRINT(x)",
        "0024  IF(x >= y)",
    ];
    let lines: Vec<&str> = listing.lines().collect();
    for (line, expected) in lines.iter().zip(expected.iter()) {
        assert!(line.starts_with(expected), "{} != {}", line, expected);
    }
    assert!(listing.contains("JUMP(0)"));
    assert!(listing.contains(": pic\n"));
    assert!(listing.ends_with("11111111 10000001 10000001 11111111; 17\n"));
}
