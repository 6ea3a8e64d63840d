mod common;
use baya::mach::{compile, Opcode};
use common::*;

#[test]
fn test_forward_reference() {
    let program = compile("goto end\nprint x\n: end\nprint y").unwrap();
    assert_eq!(program.decode().unwrap()[0], Opcode::Jump(8));
    assert_eq!(exec("x = 1 y = 2 goto end print x : end print y"), "2\n");
}

#[test]
fn test_backward_loop() {
    let source = "\
        : top\n\
        x += 1\n\
        if x != 5 then goto top\n\
        print x\n";
    assert_eq!(exec(source), "5\n");
}

#[test]
fn test_last_definition_wins() {
    let source = ": a goto skip : a x = 7 goto done : skip goto a : done print x";
    let program = compile(source).unwrap();
    assert_eq!(program.decode().unwrap()[3], Opcode::Jump(4));
    assert_eq!(exec(source), "7\n");
}

#[test]
fn test_redefined_label_after_code() {
    let source = "if x == 1 then goto done x = 1 goto done : done print x : done";
    assert_eq!(exec(source), "");
}

#[test]
fn test_undefined_label_is_zero() {
    let program = compile("goto never_defined").unwrap();
    assert_eq!(program.decode().unwrap()[0], Opcode::Jump(0));
    assert_eq!(program.undefined_labels(), ["never_defined".to_string()]);
}

#[test]
fn test_labels_are_case_sensitive() {
    let program = compile(": Top goto top").unwrap();
    assert_eq!(program.undefined_labels(), ["top".to_string()]);
}
