/*!
# Labels and Conditions

## Labels

`: NAME` marks a place in the program. `goto NAME` continues there.
Labels may be used before they are defined.

```text
goto skip
print x       ( never runs )
: skip
print y
```

Defining a label again moves it. Every `goto` uses the last definition.
A label that is never defined sends `goto` to the start of the program.
That compiles, but prints a warning, because it loops forever unless
something else ends the frame.

## Conditions

A condition guards exactly one instruction: the one right after it. When
the condition is false that instruction is skipped. There is no block and
no `else`.

```text
if x < y then x = 1
if x == 3 then print x
key action then goto jump
```

Registers compare with `==`, `!=`, `<`, `<=`, `>` and `>=`. A register can
only be compared to a literal with `==` or `!=`.

To guard several instructions, jump around them.

```text
if x != 0 then goto done
x = 10
y = 10
: done
```

## Frames that never end

A frame ends when the program runs off its last instruction. A `goto`
loop that never gets there is stopped after 100000 instructions with
`CYCLES EXCEEDED`.

*/
