/*!
# What the Panel Understands

The panel reads your code one line at a time. Blank lines and lines
starting with `#` are skipped. Indentation only matters for the lines
under an `if`, `else:` or `for`, and those must start with four spaces.

## Printing

```text
print("Hello")            # Hello
print(name)               # the value of name, or the word name
print("Hi " + name)       # pieces joined together
print(f"{x} and {x+1}")   # placeholders filled in
```

Inside an f-string placeholder you may add, subtract or multiply one
whole number. Both sides are read as whole numbers, so `{x*2}` doubles
`x` but `{15 / 3}` is printed as written.

## Variables

```text
name = "Ethan"
age = 9
guess = input("Pick a number:")
```

`input` doesn't wait for you. It pretends you typed a number from 1 to
10 and prints the prompt with that answer.

## Random numbers

```text
from random import randint
roll = randint(1, 6)
```

Without the import line, `roll` is just the text `randint(1, 6)`.
With the bounds the wrong way round, `randint(6, 1)` still draws a
number, from 2 to 6.

## Decisions

```text
if guess == secret:
    print("You got it!")
else:
    print("Try again!")
```

Only `==` between two names or numbers is understood. Any other
condition counts as false. The lines under `if` and `else:` can only
print. Any line whose text starts with `else:`, indented or not and
with or without a trailing comment, starts the `else:` part.

A `#` line inside a block is skipped, even one holding `print(`. The
web page prints those; the panel here treats them as comments
everywhere.

## Loops

```text
for i in range(1, 6):
    print(f"{i} x 2 = {i * 2}")
```

`range` takes a stop, a start and stop, or a start, stop and step, each
a whole number or a name. Any other `for` line is ignored, so the lines
under it run once as ordinary lines. A run may loop at most 65535 times
in total.

## Errors

When something goes wrong the panel shows the error in place of the
output.

```text
❌ Oops! There's an error:
ValueError on line 2: range() arg 3 must not be zero
```

*/
