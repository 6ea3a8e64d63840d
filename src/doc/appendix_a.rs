/*!
# Appendix A: Errors

Compiling stops at the first error. A program with an error never runs.

| Error | Cause |
|-------|-------|
| `SYNTAX ERROR` | A word that does not belong where it is, a condition with nothing after it, or a `goto` into sprite data. |
| `MISSING TOKEN` | The file ended in the middle of a statement. |
| `BAD NUMBER` | A literal that is not a number. |
| `OVERFLOW` | A literal out of range for where it is used. |
| `TOKEN TOO LONG` | A word over 32 characters, or a sprite row over 8. |
| `TOO MANY LABELS` | More than 64 different labels. |
| `OUT OF MEMORY` | Code and sprites together exceed 4096 bytes. |
| `UNDEFINED SPRITE` | `sprite N` past the last sprite. |

These stop a frame while it runs:

| Error | Cause |
|-------|-------|
| `DIVISION BY ZERO` | `/=` or `%=` by a register holding zero. |
| `CYCLES EXCEEDED` | The frame never reached its end. |
| `ILLEGAL INSTRUCTION` | The program counter left the code. The compiler rules this out. |

# Appendix B: Bytecode

`baya --list` prints the compiled program, one 4-byte slot per line,
with its address, the instruction, and the source line it came from.
See [`Opcode`](../mach/enum.Opcode.html) for the encoding.

*/
