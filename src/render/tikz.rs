//! TikZ text for primitive calls, plus the macro library they invoke.

use std::fmt::{self, Display};

use super::primitive::{Closing, PrimitiveCall};

/// TikZ macro library implementing every [`PrimitiveCall`].
///
/// Needs the `ifthen` package and the `patterns` and `decorations.markings`
/// TikZ libraries.
pub const PREAMBLE: &str = r#"
% Height of a waveform
\pgfmathsetlengthmacro{\waveheight}{1em}

% Width of a brick (half a timeslot)
\pgfmathsetlengthmacro{\wavewidth}{1em}

% Signal styles
\tikzset{wave x/.style={pattern=north east lines}}
\tikzset{wave bus/.style={fill=white}}
\tikzset{wave busyellow/.style={fill=yellow}}
\tikzset{wave busorange/.style={fill=orange}}
\tikzset{wave busblue/.style={fill=blue}}
\tikzset{wave pulled/.style={dotted}}
\tikzset{wave grid/.style={dashed, very thin, gray!50}}
\tikzset{wave label/.style={font=\small, inner sep=0}}

% Start a signal row.
%  #1: Vertical offset in wave heights
\newcommand{\wavestart}[1]{
	\coordinate (wave start) at (0,#1*\waveheight);
	\coordinate (last brick) at (wave start);
}

% Name of a signal row.
%  #1: Label text
\newcommand{\wavesignallabel}[1]{
	\node [anchor=east] at ([xshift=-0.5em]wave start) {#1};
}

% Move the cursor without drawing.
%  #1: Distance in brick widths
\newcommand{\waveshift}[1]{
	\coordinate (last brick) at ([xshift=#1*\wavewidth]last brick);
}

% Clip everything outside the visible part of the row, leaving room for
% the outer half of the band strokes.
%  #1: Visible width in brick widths
\newcommand{\wavebeginclip}[1]{
	\begin{scope}
	\clip ([yshift=0.6*\waveheight]wave start) rectangle ++(#1*\wavewidth,-1.2*\waveheight);
}
\newcommand{\waveendclip}{
	\end{scope}
}

% Filled bus brick.
%  #1: Brick width
%  #2: Fill style
\newcommand{\wavebus}[2]{
	\fill [#2] ([yshift=0.5*\waveheight]last brick) rectangle ++(#1*\wavewidth,-\waveheight);
	\draw ([yshift= 0.5*\waveheight]last brick) -- ++(#1*\wavewidth,0)
	      ([yshift=-0.5*\waveheight]last brick) -- ++(#1*\wavewidth,0);
	\waveshift{#1}
}

% Line brick, optionally with an edge at its start.
%  #1: Brick width
%  #2: Start level (0 low, 1 high)
%  #3: End level
%  #4: Line style
%  #5: 1 to put an arrowhead on the edge
\newcommand{\waveline}[5]{
	\draw [#4] ([yshift={(#2-0.5)*\waveheight}]last brick)
	   -- ([yshift={(#3-0.5)*\waveheight}]last brick)
	   -- ++(#1*\wavewidth,0);
	\ifthenelse{\equal{#5}{1}}{
		\path [decoration={markings, mark=at position 0.5 with {\arrow{>}}}
		      , postaction={decorate}
		      ]
		      ([yshift={(#2-0.5)*\waveheight}]last brick)
		   -- ([yshift={(#3-0.5)*\waveheight}]last brick);
	}{}
	\waveshift{#1}
}

% Sharp transition: same geometry as a line brick.
\newcommand{\waveedge}[5]{\waveline{#1}{#2}{#3}{#4}{#5}}

% Slanted transition.
%  #1: Brick width
%  #2: Start level
%  #3: End level
%  #4: Slant width in brick widths
%  #5: Line style
\newcommand{\waveslant}[5]{
	\draw [#5] ([yshift={(#2-0.5)*\waveheight}]last brick)
	   -- ([yshift={(#3-0.5)*\waveheight}, xshift=#4*\wavewidth]last brick)
	   -- ([yshift={(#3-0.5)*\waveheight}, xshift=#1*\wavewidth]last brick);
	\waveshift{#1}
}

% Slow, curved transition.
%  #1: Brick width
%  #2: Start level
%  #3: End level
%  #4: Curve width in brick widths
%  #5: Line style
\newcommand{\wavecurve}[5]{
	\draw [#5] ([yshift={(#2-0.5)*\waveheight}]last brick)
	   .. controls ([yshift={(#2-0.5)*\waveheight}]last brick)
	           and ([yshift={(#3-0.5)*\waveheight}, xshift=0.2*#4*\wavewidth]last brick)
	   .. ([yshift={(#3-0.5)*\waveheight}, xshift=#4*\wavewidth]last brick)
	   -- ([yshift={(#3-0.5)*\waveheight}, xshift=#1*\wavewidth]last brick);
	\waveshift{#1}
}

% Glitch: dip to the centre line and back.
%  #1: Brick width
%  #2: Level
%  #3: Glitch width in brick widths
%  #4: Line style
\newcommand{\waveglitch}[4]{
	\draw [#4] ([yshift={(#2-0.5)*\waveheight}]last brick)
	   -- ([xshift=0.5*#3*\wavewidth]last brick)
	   -- ([yshift={(#2-0.5)*\waveheight}, xshift=#3*\wavewidth]last brick)
	   -- ([yshift={(#2-0.5)*\waveheight}, xshift=#1*\wavewidth]last brick);
	\waveshift{#1}
}

% Close one bus and open the next.
%  #1: Brick width
%  #2: Closing fill style
%  #3: Opening fill style
%  #4: Slant width in brick widths
\newcommand{\wavebusswap}[4]{
	\draw [#2]
	      ([yshift= 0.5*\waveheight]last brick)
	   -- ([xshift=0.5*#4*\wavewidth]last brick)
	   -- ([yshift=-0.5*\waveheight]last brick);
	\draw [#3]
	      ([xshift=#1*\wavewidth, yshift= 0.5*\waveheight]last brick)
	   -- ([xshift=#4*\wavewidth,  yshift= 0.5*\waveheight]last brick)
	   -- ([xshift=0.5*#4*\wavewidth]last brick)
	   -- ([xshift=#4*\wavewidth,  yshift=-0.5*\waveheight]last brick)
	   -- ([xshift=#1*\wavewidth, yshift=-0.5*\waveheight]last brick);
	\waveshift{#1}
}

% Open a bus from a line.
%  #1: Brick width
%  #2: Line level
%  #3: Opening fill style
%  #4: Slant width in brick widths
\newcommand{\wavebusopen}[4]{
	\draw [#3]
	      ([xshift=#1*\wavewidth, yshift= 0.5*\waveheight]last brick)
	   -- ([xshift=#4*\wavewidth,  yshift= 0.5*\waveheight]last brick)
	   -- ([yshift={(#2-0.5)*\waveheight}]last brick)
	   -- ([xshift=#4*\wavewidth,  yshift=-0.5*\waveheight]last brick)
	   -- ([xshift=#1*\wavewidth, yshift=-0.5*\waveheight]last brick);
	\waveshift{#1}
}

% Close a bus into a line.
%  #1: Brick width
%  #2: Closing fill style
%  #3: Line level
%  #4: Closing width in brick widths
%  #5: Line style
\newcommand{\wavebusclosesharp}[5]{
	\draw ([yshift= 0.5*\waveheight]last brick)
	   -- ([yshift=-0.5*\waveheight]last brick);
	\draw [#5] ([yshift={(#3-0.5)*\waveheight}]last brick) -- ++(#1*\wavewidth,0);
	\waveshift{#1}
}
\newcommand{\wavebusclosesmooth}[5]{
	\draw [#2]
	      ([yshift= 0.5*\waveheight]last brick)
	   -- ([yshift={(#3-0.5)*\waveheight}, xshift=#4*\wavewidth]last brick)
	   -- ([yshift=-0.5*\waveheight]last brick);
	\draw [#5] ([yshift={(#3-0.5)*\waveheight}, xshift=#4*\wavewidth]last brick)
	   -- ([yshift={(#3-0.5)*\waveheight}, xshift=#1*\wavewidth]last brick);
	\waveshift{#1}
}
\newcommand{\wavebusclosecurved}[5]{
	\draw [#2]
	      ([yshift= 0.5*\waveheight]last brick)
	   .. controls ([yshift= 0.5*\waveheight, xshift=0.5*#4*\wavewidth]last brick)
	   .. ([yshift={(#3-0.5)*\waveheight}, xshift=#4*\wavewidth]last brick)
	   .. controls ([yshift=-0.5*\waveheight, xshift=0.5*#4*\wavewidth]last brick)
	   .. ([yshift=-0.5*\waveheight]last brick);
	\draw [#5] ([yshift={(#3-0.5)*\waveheight}, xshift=#4*\wavewidth]last brick)
	   -- ([yshift={(#3-0.5)*\waveheight}, xshift=#1*\wavewidth]last brick);
	\waveshift{#1}
}

% Broken-axis mark over an elided stretch of time.
%  #1: Distance back from the cursor in brick widths
\newcommand{\wavegap}[1]{
	\fill [white]
	      ([xshift=-#1*\wavewidth-0.15*\wavewidth, yshift=-0.7*\waveheight]last brick)
	   -- ++(0.2*\wavewidth, 1.4*\waveheight)
	   -- ++(0.1*\wavewidth, 0)
	   -- ++(-0.2*\wavewidth, -1.4*\waveheight)
	   -- cycle;
	\draw ([xshift=-#1*\wavewidth-0.15*\wavewidth, yshift=-0.7*\waveheight]last brick)
	   -- ++(0.2*\wavewidth, 1.4*\waveheight)
	      ([xshift=-#1*\wavewidth-0.05*\wavewidth, yshift=-0.7*\waveheight]last brick)
	   -- ++(0.2*\wavewidth, 1.4*\waveheight);
}

% Named point for annotations.
%  #1: Node name
\newcommand{\wavenode}[1]{
	\coordinate (node #1) at (last brick);
}

% Centre of a bus span.
%  #1: Span index
%  #2: Distance from the row origin in brick widths
\newcommand{\wavebusanchor}[2]{
	\coordinate (bus #1) at ([xshift=#2*\wavewidth]wave start);
}

% Data label for a bus span.
%  #1: Span index
%  #2: Label text
\newcommand{\wavebuslabel}[2]{
	\node [wave label] at (bus #1) {#2};
}

% Dashed guides, one per timeslot.
%  #1: Number of timeslots
%  #2: Number of rows
%  #3: Row spacing in wave heights
\newcommand{\wavegrid}[3]{
	\foreach \slot in {0,...,#1} {
		\draw [wave grid] ({2*\slot*\wavewidth}, 0.5*\waveheight) -- ++(0, {-#2*#3*\waveheight});
	}
}
"#;

const STANDALONE_HEADER: &str = r"\documentclass[tikz]{standalone}
\usepackage{ifthen}
\usetikzlibrary{patterns,decorations.markings}
";

/// Escape text for use inside a TikZ node.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str(r"\textbackslash{}"),
            '~' => out.push_str(r"\textasciitilde{}"),
            '^' => out.push_str(r"\textasciicircum{}"),
            '&' | '%' | '$' | '#' | '_' | '{' | '}' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}

struct Num(f64);

impl Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.0)
    }
}

fn invoke(f: &mut fmt::Formatter<'_>, name: &str, args: &[&dyn Display]) -> fmt::Result {
    write!(f, "\\{}", name)?;
    for arg in args {
        write!(f, "{{{}}}", arg)?;
    }
    Ok(())
}

fn flag(value: bool) -> u8 {
    u8::from(value)
}

impl Display for PrimitiveCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimitiveCall::WaveStart { y } => invoke(f, "wavestart", &[&Num(*y)]),
            PrimitiveCall::SignalLabel { text } => invoke(f, "wavesignallabel", &[&escape(text)]),
            PrimitiveCall::Shift { width } => invoke(f, "waveshift", &[&Num(*width)]),
            PrimitiveCall::BeginClip { width } => invoke(f, "wavebeginclip", &[&Num(*width)]),
            PrimitiveCall::EndClip => invoke(f, "waveendclip", &[]),
            PrimitiveCall::BusBrick { width, fill } => {
                invoke(f, "wavebus", &[&Num(*width), &fill.as_str()])
            }
            PrimitiveCall::LineBrick {
                width,
                from,
                to,
                style,
                arrow,
            } => invoke(
                f,
                "waveline",
                &[
                    &Num(*width),
                    &Num(from.0),
                    &Num(to.0),
                    &style.as_str(),
                    &flag(*arrow),
                ],
            ),
            PrimitiveCall::Edge {
                width,
                from,
                to,
                style,
                arrow,
            } => invoke(
                f,
                "waveedge",
                &[
                    &Num(*width),
                    &Num(from.0),
                    &Num(to.0),
                    &style.as_str(),
                    &flag(*arrow),
                ],
            ),
            PrimitiveCall::Slant {
                width,
                from,
                to,
                slant,
                style,
            } => invoke(
                f,
                "waveslant",
                &[
                    &Num(*width),
                    &Num(from.0),
                    &Num(to.0),
                    &Num(*slant),
                    &style.as_str(),
                ],
            ),
            PrimitiveCall::Curve {
                width,
                from,
                to,
                span,
                style,
            } => invoke(
                f,
                "wavecurve",
                &[
                    &Num(*width),
                    &Num(from.0),
                    &Num(to.0),
                    &Num(*span),
                    &style.as_str(),
                ],
            ),
            PrimitiveCall::Glitch {
                width,
                level,
                span,
                style,
            } => invoke(
                f,
                "waveglitch",
                &[&Num(*width), &Num(level.0), &Num(*span), &style.as_str()],
            ),
            PrimitiveCall::BusSwap {
                width,
                from,
                to,
                slant,
            } => invoke(
                f,
                "wavebusswap",
                &[&Num(*width), &from.as_str(), &to.as_str(), &Num(*slant)],
            ),
            PrimitiveCall::BusOpen {
                width,
                from,
                to,
                slant,
            } => invoke(
                f,
                "wavebusopen",
                &[&Num(*width), &Num(from.0), &to.as_str(), &Num(*slant)],
            ),
            PrimitiveCall::BusClose {
                width,
                from,
                to,
                closing,
                span,
                style,
            } => {
                let name = match closing {
                    Closing::Sharp => "wavebusclosesharp",
                    Closing::Smooth => "wavebusclosesmooth",
                    Closing::Curved => "wavebusclosecurved",
                };
                invoke(
                    f,
                    name,
                    &[
                        &Num(*width),
                        &from.as_str(),
                        &Num(to.0),
                        &Num(*span),
                        &style.as_str(),
                    ],
                )
            }
            PrimitiveCall::Gap { back } => invoke(f, "wavegap", &[&Num(*back)]),
            PrimitiveCall::NodeAnchor { name } => invoke(f, "wavenode", &[name]),
            PrimitiveCall::BusAnchor { index, x } => {
                invoke(f, "wavebusanchor", &[index, &Num(*x)])
            }
            PrimitiveCall::BusLabel { index, text } => {
                invoke(f, "wavebuslabel", &[index, &escape(text)])
            }
            PrimitiveCall::Gridlines {
                slots,
                rows,
                row_spacing,
            } => invoke(f, "wavegrid", &[slots, rows, &Num(*row_spacing)]),
        }
    }
}

/// Render calls one per line.
pub fn write_calls(out: &mut String, calls: &[PrimitiveCall]) {
    for call in calls {
        out.push('\t');
        out.push_str(&call.to_string());
        out.push('\n');
    }
}

/// Wrap calls in a `tikzpicture`.
pub fn picture(calls: &[PrimitiveCall]) -> String {
    let mut out = String::from("\\begin{tikzpicture}[line cap=rect, line join=round]\n");
    write_calls(&mut out, calls);
    out.push_str("\\end{tikzpicture}\n");
    out
}

/// Wrap a picture in a standalone LaTeX document carrying the macro library.
pub fn standalone(picture: &str) -> String {
    let mut out = String::from(STANDALONE_HEADER);
    out.push_str(PREAMBLE);
    out.push_str("\\begin{document}\n");
    out.push_str(picture);
    out.push_str("\\end{document}\n");
    out
}
