/*!
# Screen and Keys

## Colors

The screen has a palette of 16 colors numbered 0 to 15. `clear N` fills
the screen with color N. `color N` sets the `ink` register.

```text
clear 0
color 8
```

## Sprites

Sprites are 8 pixels wide and 4 pixels tall. They live after the word
`data`, which ends the program. From there on the file is read line by
line. `: NAME` names the sprite that follows. Each other line is a row;
`x` is a lit pixel and any other character is not. Blank lines are
ignored, so draw an empty row with dots.

```text
sprite ship
data
: ship
...xx...
..xxxx..
.xxxxxx.
xx.xx.xx
```

`sprite NAME` draws the named sprite with its top left corner at
`x`, `y` in the `ink` color. Unlit pixels are left alone.
`sprite N` draws the Nth sprite after `data`, counting from 0.

## Keys

`key K then` guards the next instruction on key K being pressed during
this frame. The keys are `action`, `up`, `down`, `left` and `right`.
In the terminal these are space, the arrow keys, or WASD.

*/
