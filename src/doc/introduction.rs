/*!
# Getting Started

Run the executable with no arguments to open the editor. The editor
starts with the welcome snippet already in its buffer.

<pre><code>&nbsp;  Python Playground
&nbsp;  Click "Run Code" to see your Python magic! ✨
&nbsp;> :run
&nbsp;  🎉 Python Output:
&nbsp;  Hello, I'm Ethan!
&nbsp;  I love coding! 1
</code></pre>

Every line you type that doesn't start with a colon is added to the end
of the code buffer. Lines that start with a colon are commands.

| Command | What it does |
|---|---|
| `:run` | Runs the buffer and shows the output panel |
| `:list` | Shows the buffer with line numbers |
| `:new` | Empties the buffer |
| `:load <name>` | Loads a sample or a file and runs it |
| `:samples` | Lists the samples |
| `:trace on` | Shows the line numbers that ran, like `[1][2][4]` |
| `:quit` | Leaves the editor. So does CTRL-D |

Press TAB after `:load ` to complete a sample name. A long loop can
be stopped with CTRL-C, which ends the run with `KeyboardInterrupt`.

To run a file once without the editor, pass it on the command line.
The exit status is 1 when the run fails.

```text
playground --trace story.py
```

Each run starts fresh. Variables from the previous run are gone, and
running the same code twice shows the same thing unless it draws
random numbers.

*/
