/*!

This is the long-form manual for `topsis` and the `topsis` command line program.

## Input formats

The following formats are supported:
* `csv` Comma Separated Values
* `xlsx`, `xls` Excel spreadsheets (only the first worksheet, unless a name is provided)

In all the formats, the first non-blank row is the header and the following rows are the
alternatives, one per row:

```text
Model,Price,Storage,Camera,Looks
M1,250,16,12,5
M2,200,16,8,3
M3,300,32,16,4
M4,275,32,8,4
```

- the first column holds the names of the alternatives. A missing name is replaced by `Option <n>`,
  where `n` is the position of the alternative (starting at 1).
- each other column is a criterion. All the values must be numbers: an empty cell is rejected,
  it is never read as zero.
- at least 3 columns (a name and 2 criteria) and at least 1 alternative are required.
- rows that are completely blank are ignored. Cells beyond the width of the header are ignored.
- a value that is not a number is reported with its row number in the file, starting at 1 with the
  header. Blank rows count: in `Name,A,B` / (blank) / `X,1,abc` the error is in row 3. This is the row
  number shown by a spreadsheet, not the position among the non-blank rows.
- numbers are read after trimming the spaces: `12`, `-0.5`, `1e3`. `Infinity` is accepted but
  `inf`, `NaN` and booleans are not numbers.

## Parameters

**Weights** A comma-separated list of numbers, one per criterion: `1,1,2,1`. Tokens that are not numbers
are ignored, and then the number of weights is checked. An empty token is a weight of 0: `1,1,2,1,` has
5 weights. With the strict mode
(`--strict-weights` or `"strictWeights": true`), the first token that is not a number is reported instead.

**Impacts** A comma-separated list of `+` (higher is better) and `-` (lower is better), one per criterion:
`+,+,-,+`.

## Output

The result has one row per alternative, in the order of the input:

| Alternative | TOPSIS Score | Rank |
|-------------|--------------|------|
| M1          | 0.45866      | 3    |
| M2          | 0.439026     | 4    |
| M3          | 0.513933     | 2    |
| M4          | 0.793246     | 1    |

The scores are rounded to 6 decimals. The rank 1 is the best alternative. Alternatives with the same score
are ranked in the order of the input.

The result can be exported in CSV (with the same header as above) or in JSON.

### Degenerate inputs

If a criterion is zero for all the alternatives, or if all the alternatives are identical, the scores cannot
be computed and are reported as `NaN`. These alternatives are ranked last. With the option
`--zero-distance-midpoint` (`"zeroDistance": "midpoint"`), an alternative that is both at the ideal and at the
anti-ideal point receives a score of 0.5 instead.

## Configuration

The program accepts a configuration file in JSON. All the fields are optional, and the command line flags
take precedence:

```json
{
  "inputFile": "phones.csv",
  "inputType": "csv",
  "excelWorksheetName": null,
  "weights": "0.25,0.25,0.25,0.25",
  "impacts": "+,+,-,+",
  "outputFile": "topsis-result.csv",
  "outputFormat": "csv",
  "rules": {
    "strictWeights": false,
    "zeroDistance": "propagate"
  }
}
```

Relative paths are interpreted from the directory that contains the configuration file.

 */
