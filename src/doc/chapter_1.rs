/*!
# Registers and Arithmetic

Baya has no variables. It has thirteen registers, each holding a number
from 0 to 255.

| Register | Purpose |
|----------|---------|
| `x` `y` | General purpose. Also where `sprite` draws. |
| `z` `w` `a` `b` `c` `d` `e` `f` `t` | General purpose. |
| `tick` | Counts frames. Incremented after every completed frame. |
| `ink` | The color `sprite` draws with. Set by `color`. |

All registers start at zero when the program starts.

## Assignment

```text
x = 10        ( set to a literal )
x += 10       ( add a literal )
x = random 6  ( 0 to 5 )
x = y         ( copy a register )
x += y
x -= y
x *= y
x /= y        ( rounds down )
x %= y
x &= y
x |= y
x ^= y
```

Only `=` and `+=` accept a literal. Use `x += -1` to count down.
Arithmetic wraps around, so `x = 250 x += 10` leaves `x` at 4.
Dividing by a register holding zero stops the frame with
`DIVISION BY ZERO`.

## Literals

Literals are decimal, hex with `0x`, or binary with `0b`. Underscores
may separate digits. A leading `-` stores the two's complement.

```text
x = 200
x = 0xC8
x = 0b1100_1000
x = -56
```

Register literals range from -128 to 255. `random` takes 1 to 255.
Anything outside is an `OVERFLOW` error when compiling.

## Print

`print` writes a register as a decimal line to the terminal.

```text
print x
```

*/
