/*!
# Introductory Tutorial for Baya

Baya programs live in a plain text file. Write one called `hello.baya`:

```text
x = 42
print x
```

Run it with a fixed number of frames so you can see the output without
the full screen display.

<pre><code>&nbsp;$ baya --ticks 1 hello.baya
&nbsp;42
</code></pre>

Without `--ticks` the program runs on a 64 by 32 pixel screen in the
terminal, thirty times a second, until you press ESC or CTRL-C.

The important thing to know about Baya is that the whole program runs
again every frame. The values of registers do not reset between frames.
Try this program with `--ticks 3`.

```text
t += 1
print t
```

<pre><code>&nbsp;$ baya --ticks 3 count.baya
&nbsp;1
&nbsp;2
&nbsp;3
</code></pre>

Words are separated by whitespace. Anything inside parentheses is a comment.
Comments can appear anywhere, even in the middle of a word, and do not
separate words. A closing parenthesis on its own is ignored.

```text
( this is a comment )
x = 1  ( so is this )
```

When something is wrong with a program nothing runs at all. You get
one error naming the line, and the columns of the word at fault.

<pre><code>&nbsp;$ baya oops.baya
&nbsp;SYNTAX ERROR IN 3 (5..7); EXPECTED THEN
</code></pre>

*/
