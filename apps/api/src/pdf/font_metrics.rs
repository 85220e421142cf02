//! Static Helvetica metrics and greedy word-wrap.
//!
//! Character widths are in em units (relative to font size), taken from the
//! standard Helvetica AFM (StandardEncoding). The renderer only emits printable
//! ASCII, so the table covers 0x20..=0x7E. Index = (char as usize) - 32.

/// Static character-width table for a font.
///
/// Width array slot layout:
/// ```text
/// [0]=sp  [1]=!   [2]="   [3]=#   [4]=$   [5]=%   [6]=&   [7]='
/// [8]=(   [9]=)   [10]=*  [11]=+  [12]=,  [13]=-  [14]=.  [15]=/
/// [16..25]=0-9
/// [26]=:  [27]=;  [28]=<  [29]==  [30]=>  [31]=?  [32]=@
/// [33..58]=A-Z
/// [59]=[  [60]=\  [61]=]  [62]=^  [63]=_  [64]=`
/// [65..90]=a-z
/// [91]={  [92]=|  [93]=}  [94]=~
/// ```
pub struct FontMetricTable {
    widths: [f32; 95],
    /// Fallback width for characters outside the table.
    pub average_char_width: f32,
}

/// Helvetica, the PDF base-14 font used for exported notes.
pub static HELVETICA: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp    !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.278, 0.278, 0.355, 0.556, 0.556, 0.889, 0.667, 0.222, 0.333, 0.333, 0.389, 0.584, 0.278, 0.333, 0.278, 0.278,
        // 0     1      2      3      4      5      6      7      8      9
        0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556,
        // :     ;      <      =      >      ?      @
        0.278, 0.278, 0.584, 0.584, 0.584, 0.556, 1.015,
        // A     B      C      D      E      F      G      H      I      J      K      L      M
        0.667, 0.667, 0.722, 0.722, 0.667, 0.611, 0.778, 0.722, 0.278, 0.500, 0.667, 0.556, 0.833,
        // N     O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.778, 0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, 0.667, 0.667, 0.611,
        // [     \      ]      ^      _      `
        0.278, 0.278, 0.278, 0.469, 0.556, 0.222,
        // a     b      c      d      e      f      g      h      i      j      k      l      m
        0.556, 0.556, 0.500, 0.556, 0.556, 0.278, 0.556, 0.556, 0.222, 0.222, 0.500, 0.222, 0.833,
        // n     o      p      q      r      s      t      u      v      w      x      y      z
        0.556, 0.556, 0.556, 0.556, 0.333, 0.500, 0.278, 0.556, 0.500, 0.722, 0.500, 0.500, 0.500,
        // {     |      }      ~
        0.334, 0.260, 0.334, 0.584,
    ],
    average_char_width: 0.556,
};

impl FontMetricTable {
    fn char_width(&self, c: char) -> f32 {
        let code = c as usize;
        if (32..=126).contains(&code) {
            self.widths[code - 32]
        } else {
            self.average_char_width
        }
    }

    /// Measures the rendered width of a string in em units.
    pub fn measure_str(&self, s: &str) -> f32 {
        s.chars().map(|c| self.char_width(c)).sum()
    }

    /// Greedy word-wrap of one source line to `max_width_em`.
    ///
    /// Leading indentation is kept on the first output line. A blank line yields a
    /// single empty line so paragraph spacing survives. Words wider than the line
    /// are hard-broken at character boundaries.
    pub fn wrap_line(&self, line: &str, max_width_em: f32) -> Vec<String> {
        let trimmed = line.trim_start();
        if trimmed.is_empty() {
            return vec![String::new()];
        }
        let indent = &line[..line.len() - trimmed.len()];
        let space = self.char_width(' ');

        let mut lines = Vec::new();
        let mut current = indent.to_string();
        let mut current_width = self.measure_str(indent);
        let mut line_has_word = false;

        for word in trimmed.split_whitespace() {
            let word_width = self.measure_str(word);
            let gap = if line_has_word { space } else { 0.0 };

            if line_has_word && current_width + gap + word_width > max_width_em {
                lines.push(std::mem::take(&mut current));
                current_width = 0.0;
                line_has_word = false;
            }

            if !line_has_word && current_width + word_width > max_width_em {
                for c in word.chars() {
                    let w = self.char_width(c);
                    if current_width + w > max_width_em && !current.trim().is_empty() {
                        lines.push(std::mem::take(&mut current));
                        current_width = 0.0;
                    }
                    current.push(c);
                    current_width += w;
                }
                line_has_word = true;
                continue;
            }

            if line_has_word {
                current.push(' ');
                current_width += space;
            }
            current.push_str(word);
            current_width += word_width;
            line_has_word = true;
        }

        lines.push(current);
        lines
    }
}
